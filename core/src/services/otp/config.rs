//! OTP manager configuration

use crate::domain::otp_record::{CODE_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Policy knobs for the OTP manager
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Minutes before an issued passcode expires
    pub expiration_minutes: i64,

    /// Failed verification attempts allowed before the record is dropped
    pub max_attempts: u32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: CODE_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
