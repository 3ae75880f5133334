//! Handler for `POST /verify-otp`

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use otp_core::services::otp::SmsSender;
use otp_shared::types::response::MessageResponse;
use otp_shared::utils::phone::mask_phone_number;

use crate::dto::otp::VerifyOtpRequest;
use crate::handlers::error::otp_error_response;

use super::AppState;

/// Handler for POST /verify-otp
///
/// Verifies a submitted passcode against the one on record. Success
/// consumes the passcode; it cannot be used again.
///
/// # Request Body
///
/// ```json
/// {
///     "phoneNumber": "+14155552671",
///     "otp": "123456"
/// }
/// ```
///
/// # Response
///
/// - `200 {"message": "OTP verified successfully"}`
/// - `400` with a distinct `error` message for: no passcode outstanding,
///   passcode expired, attempt limit reached, or code mismatch
pub async fn verify_otp<S: SmsSender + 'static>(
    state: web::Data<AppState<S>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();

    log::info!(
        "[{}] Processing verify-otp request for {}",
        request_id,
        mask_phone_number(&request.phone_number)
    );

    match state.manager.verify(&request.phone_number, &request.otp) {
        Ok(()) => {
            log::info!(
                "[{}] OTP verified for {}",
                request_id,
                mask_phone_number(&request.phone_number)
            );
            HttpResponse::Ok().json(MessageResponse::new("OTP verified successfully"))
        }
        Err(error) => {
            log::warn!(
                "[{}] OTP verification failed for {}: {}",
                request_id,
                mask_phone_number(&request.phone_number),
                error
            );
            otp_error_response(&error)
        }
    }
}
