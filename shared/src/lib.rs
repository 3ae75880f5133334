//! # OTP Shared
//!
//! Cross-cutting pieces used by every layer of the SMS OTP service:
//! configuration loading, phone number utilities, and the HTTP response
//! types of the public surface.

pub mod config;
pub mod types;
pub mod utils;
