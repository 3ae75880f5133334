//! Handler for `POST /send-otp`

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::services::otp::SmsSender;
use otp_shared::types::response::{ErrorResponse, MessageResponse};
use otp_shared::utils::phone::mask_phone_number;

use crate::dto::otp::SendOtpRequest;
use crate::handlers::error::{otp_error_response, INVALID_PHONE_MESSAGE};

use super::AppState;

/// Handler for POST /send-otp
///
/// Issues a one-time passcode for the given phone number and dispatches it
/// via SMS.
///
/// # Request Body
///
/// ```json
/// {
///     "phoneNumber": "+14155552671"
/// }
/// ```
///
/// # Response
///
/// - `200 {"message": "OTP sent successfully"}`
/// - `400 {"error": "Invalid phone number format. Use format: +CountryCodeNumber"}`
/// - `500 {"error": "Failed to send OTP"}` when the SMS provider fails
pub async fn send_otp<S: SmsSender + 'static>(
    state: web::Data<AppState<S>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();

    log::info!(
        "[{}] Processing send-otp request for {}",
        request_id,
        mask_phone_number(&request.phone_number)
    );

    if request.validate().is_err() {
        log::warn!(
            "[{}] Rejected send-otp request with malformed phone number",
            request_id
        );
        return HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_PHONE_MESSAGE));
    }

    match state.manager.issue(&request.phone_number).await {
        Ok(message_id) => {
            log::info!(
                "[{}] OTP dispatched to {}, message_id: {}",
                request_id,
                mask_phone_number(&request.phone_number),
                message_id
            );
            HttpResponse::Ok().json(MessageResponse::new("OTP sent successfully"))
        }
        Err(error) => {
            log::error!(
                "[{}] Failed to issue OTP for {}: {}",
                request_id,
                mask_phone_number(&request.phone_number),
                error
            );
            otp_error_response(&error)
        }
    }
}
