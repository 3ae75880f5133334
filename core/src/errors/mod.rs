//! Error taxonomy for the OTP lifecycle
//!
//! Every variant is recoverable by the caller (the end user may simply
//! request a new passcode); none is fatal to the process. The API layer
//! maps each variant to an HTTP status and message; internal detail such
//! as provider errors stays in the `DeliveryFailed` reason and is only
//! logged, never surfaced to the client.

use thiserror::Error;

/// Errors produced by OTP issuance and verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// The phone number does not match the accepted `+<country code><10
    /// digit subscriber>` format. Rejected before any code is generated.
    #[error("invalid phone number format: {phone}")]
    InvalidPhoneFormat { phone: String },

    /// The SMS provider failed or timed out; the issuance was rolled back.
    #[error("failed to deliver passcode: {reason}")]
    DeliveryFailed { reason: String },

    /// No passcode is outstanding for this number.
    #[error("no passcode found for this number")]
    NotFound,

    /// The passcode outlived its expiry window; the record was deleted.
    #[error("passcode expired")]
    Expired,

    /// The attempt limit was reached; the record was deleted.
    #[error("maximum verification attempts reached")]
    TooManyAttempts,

    /// The submitted code did not match; the attempt counter was bumped.
    #[error("submitted passcode does not match")]
    Mismatch,
}

/// Result alias for OTP operations
pub type OtpResult<T> = Result<T, OtpError>;
