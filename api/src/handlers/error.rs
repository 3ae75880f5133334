//! Mapping from the core error taxonomy to HTTP responses
//!
//! Each error kind maps to a fixed status and message. Internal detail
//! (provider failures, stack traces) stays server-side: the client only
//! ever sees the strings below.

use actix_web::HttpResponse;

use otp_core::errors::OtpError;
use otp_shared::types::response::ErrorResponse;

/// Client-facing message for malformed phone numbers
pub const INVALID_PHONE_MESSAGE: &str =
    "Invalid phone number format. Use format: +CountryCodeNumber";

/// Translate an [`OtpError`] into the HTTP response the client sees.
pub fn otp_error_response(error: &OtpError) -> HttpResponse {
    match error {
        OtpError::InvalidPhoneFormat { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_PHONE_MESSAGE))
        }
        OtpError::DeliveryFailed { .. } => {
            // The provider's reason is logged where the failure happened.
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to send OTP"))
        }
        OtpError::NotFound => {
            HttpResponse::BadRequest().json(ErrorResponse::new("No OTP found for this number"))
        }
        OtpError::Expired => HttpResponse::BadRequest().json(ErrorResponse::new("OTP expired")),
        OtpError::TooManyAttempts => HttpResponse::BadRequest()
            .json(ErrorResponse::new("Max verification attempts reached")),
        OtpError::Mismatch => HttpResponse::BadRequest().json(ErrorResponse::new("Invalid OTP")),
    }
}
