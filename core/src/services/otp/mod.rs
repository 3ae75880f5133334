//! OTP manager module
//!
//! Owns the record store and enforces the issuance/verification policy:
//! - cryptographically random 6-digit code generation
//! - one active record per phone number (issuance overwrites)
//! - lazy expiry, attempt limiting, single-use consumption
//! - SMS dispatch through the injected [`SmsSender`] with rollback on
//!   delivery failure

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::OtpConfig;
pub use service::OtpManager;
pub use traits::SmsSender;
