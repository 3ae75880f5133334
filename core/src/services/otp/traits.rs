//! Sender seam for SMS delivery

use async_trait::async_trait;

/// External capability that delivers a text message to a phone number.
///
/// Implementations live in the infra crate (Twilio over HTTPS, a mock for
/// development and tests). The call is an independent network operation:
/// the manager never holds a store lock while a send is in flight, and a
/// failure is reported as a string that the manager maps to
/// `OtpError::DeliveryFailed`.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `body` to `to`, returning the provider's message id.
    async fn send(&self, to: &str, body: &str) -> Result<String, String>;
}
