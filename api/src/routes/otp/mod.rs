//! OTP endpoints: request a passcode, verify a submission

pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use otp_core::services::otp::{OtpManager, SmsSender};

/// Application state shared across all requests
pub struct AppState<S: SmsSender> {
    /// The OTP manager owning the record store
    pub manager: Arc<OtpManager<S>>,
}
