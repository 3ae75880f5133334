//! Request DTOs for the public API

pub mod otp;

pub use otp::{SendOtpRequest, VerifyOtpRequest};
