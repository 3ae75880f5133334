//! Domain entities

pub mod otp_record;

pub use otp_record::{OtpRecord, CODE_EXPIRATION_MINUTES, CODE_LENGTH, MAX_ATTEMPTS};
