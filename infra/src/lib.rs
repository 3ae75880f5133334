//! # OTP Infra
//!
//! Infrastructure layer: implementations of the core's [`SmsSender`] seam.
//! Ships a Twilio client speaking the Messages REST API over HTTPS and a
//! mock sender for development and tests.
//!
//! [`SmsSender`]: otp_core::services::otp::SmsSender

pub mod sms;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfraError {
    /// Configuration is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// The SMS provider rejected or failed the request
    #[error("sms error: {0}")]
    Sms(String),
}

pub use sms::{MockSms, TwilioConfig, TwilioSms};
