//! Mock SMS sender
//!
//! Logs messages instead of sending them. Used when `SMS_PROVIDER=mock`
//! (the default) and throughout the test suites.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::services::otp::SmsSender;
use otp_shared::utils::phone::mask_phone_number;

/// Mock SMS sender for development and testing
///
/// - logs each message at info level (codes included, so never enable in
///   production)
/// - records every message for assertions
/// - can simulate provider failures
#[derive(Clone, Default)]
pub struct MockSms {
    /// Counter for messages accepted
    message_count: Arc<AtomicU64>,
    /// Captured `(to, body)` pairs in send order
    sent: Arc<Mutex<Vec<(String, String)>>>,
    /// Whether every send should fail
    simulate_failure: bool,
}

impl MockSms {
    /// Create a new mock sender that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock sender that fails every send.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Total number of messages accepted.
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// The most recent message body sent to `phone`, if any.
    pub fn last_body_for(&self, phone: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == phone)
            .map(|(_, body)| body.clone())
    }
}

#[async_trait]
impl SmsSender for MockSms {
    async fn send(&self, to: &str, body: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(to = %mask_phone_number(to), "Mock SMS sender simulating failure");
            return Err("simulated SMS failure".to_string());
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));

        let message_id = format!("mock-{}", Uuid::new_v4());
        info!(
            to = %mask_phone_number(to),
            message_id = %message_id,
            body = %body,
            "Mock SMS sent"
        );
        Ok(message_id)
    }
}
