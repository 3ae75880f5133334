//! # OTP Core
//!
//! OTP lifecycle state machine for phone-number authentication: code
//! generation, the keyed record store with lazy expiry, attempt limiting,
//! and single-use consumption. This crate has no HTTP or provider code;
//! SMS delivery is reached only through the [`services::otp::SmsSender`]
//! seam.

pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use store::OtpStore;
