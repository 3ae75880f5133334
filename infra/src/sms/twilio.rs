//! Twilio SMS sender
//!
//! Speaks the Twilio Messages REST API directly over HTTPS. Every request
//! carries a bounded timeout so a slow provider surfaces as a delivery
//! failure instead of a hung handler.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

use otp_core::services::otp::SmsSender;
use otp_shared::utils::phone::mask_phone_number;

use crate::InfraError;

/// Twilio sender configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfraError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfraError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_PHONE_NUMBER")
            .map_err(|_| InfraError::Config("TWILIO_PHONE_NUMBER not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfraError::Config(
                "TWILIO_PHONE_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            request_timeout_secs: std::env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// Successful response body from the Messages endpoint
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

/// Twilio SMS sender implementation
pub struct TwilioSms {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSms {
    /// Create a new Twilio sender
    pub fn new(config: TwilioConfig) -> Result<Self, InfraError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfraError::Config(format!("failed to build HTTP client: {}", e)))?;

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS sender initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfraError> {
        Self::new(TwilioConfig::from_env()?)
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        )
    }

    async fn send_message(&self, to: &str, body: &str) -> Result<String, InfraError> {
        let params = [
            ("To", to),
            ("From", self.config.from_number.as_str()),
            ("Body", body),
        ];

        debug!(to = %mask_phone_number(to), "Dispatching SMS via Twilio");

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                // Timeouts land here too.
                error!(to = %mask_phone_number(to), error = %e, "Twilio request failed");
                InfraError::Sms(format!("request to Twilio failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                to = %mask_phone_number(to),
                status = %status,
                detail = %detail,
                "Twilio rejected the message"
            );
            return Err(InfraError::Sms(format!(
                "Twilio returned {}: {}",
                status, detail
            )));
        }

        let resource: MessageResource = response
            .json()
            .await
            .map_err(|e| InfraError::Sms(format!("unexpected Twilio response: {}", e)))?;

        info!(
            to = %mask_phone_number(to),
            message_sid = %resource.sid,
            "SMS accepted by Twilio"
        );

        Ok(resource.sid)
    }
}

#[async_trait]
impl SmsSender for TwilioSms {
    async fn send(&self, to: &str, body: &str) -> Result<String, String> {
        self.send_message(to, body).await.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TwilioConfig {
        TwilioConfig {
            account_sid: "AC00000000000000000000000000000000".to_string(),
            auth_token: "secret".to_string(),
            from_number: "+15005550006".to_string(),
            request_timeout_secs: 10,
        }
    }

    #[test]
    fn test_messages_url_includes_account_sid() {
        let sender = TwilioSms::new(config()).unwrap();
        assert_eq!(
            sender.messages_url(),
            "https://api.twilio.com/2010-04-01/Accounts/AC00000000000000000000000000000000/Messages.json"
        );
    }

    #[test]
    fn test_message_resource_deserialization() {
        let resource: MessageResource =
            serde_json::from_str(r#"{"sid": "SM123", "status": "queued"}"#).unwrap();
        assert_eq!(resource.sid, "SM123");
    }
}
