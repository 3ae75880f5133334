//! # OTP API
//!
//! HTTP surface of the SMS OTP service: two JSON endpoints
//! (`POST /send-otp`, `POST /verify-otp`) translating between HTTP and the
//! core OTP manager.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
