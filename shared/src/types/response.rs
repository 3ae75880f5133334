//! HTTP response body types for the public API surface

use serde::{Deserialize, Serialize};

/// Success response body: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable success message
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response body: `{"error": "..."}`
///
/// Only a human-readable message crosses the boundary; internal detail
/// (provider errors, stack traces) is logged server-side and never
/// surfaced to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse::new("OTP sent successfully");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"OTP sent successfully"}"#);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("OTP expired");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"OTP expired"}"#);
    }
}
