//! OTP endpoint request bodies

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use otp_shared::utils::phone::is_valid_phone_number;

/// Body of `POST /send-otp`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number in `+<country code><subscriber>` format,
    /// e.g. `+14155552671`
    #[serde(rename = "phoneNumber")]
    #[validate(custom = "validate_phone")]
    pub phone_number: String,
}

/// Body of `POST /verify-otp`
///
/// No format validation here: a malformed phone number simply has no
/// record and verification reports that no passcode is outstanding, and a
/// wrong-length code is an ordinary mismatch that must count as an
/// attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    /// Phone number the passcode was issued for
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    /// The submitted 6-digit passcode
    pub otp: String,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone_number(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_uses_camel_case_wire_name() {
        let request: SendOtpRequest =
            serde_json::from_str(r#"{"phoneNumber": "+14155552671"}"#).unwrap();
        assert_eq!(request.phone_number, "+14155552671");
    }

    #[test]
    fn test_send_request_validation() {
        let valid = SendOtpRequest {
            phone_number: "+14155552671".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = SendOtpRequest {
            phone_number: "12345".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_verify_request_deserialization() {
        let request: VerifyOtpRequest =
            serde_json::from_str(r#"{"phoneNumber": "+14155552671", "otp": "123456"}"#).unwrap();
        assert_eq!(request.phone_number, "+14155552671");
        assert_eq!(request.otp, "123456");
    }
}
