//! OTP manager implementation

use std::sync::Arc;

use chrono::Utc;

use otp_shared::utils::phone::{is_valid_phone_number, mask_phone_number};

use crate::domain::otp_record::OtpRecord;
use crate::errors::{OtpError, OtpResult};
use crate::store::OtpStore;

use super::config::OtpConfig;
use super::traits::SmsSender;

/// Exclusive owner of the OTP record store.
///
/// Issues passcodes, dispatches them through the injected sender, and
/// verifies submissions against the policy in [`OtpStore::verify_at`]. No
/// other component mutates records.
pub struct OtpManager<S: SmsSender> {
    /// SMS sender for passcode delivery
    sms: Arc<S>,
    /// Keyed record store
    store: OtpStore,
    /// Policy configuration
    config: OtpConfig,
}

impl<S: SmsSender> OtpManager<S> {
    /// Create a manager with the given sender and policy.
    pub fn new(sms: Arc<S>, config: OtpConfig) -> Self {
        let store = OtpStore::new(config.expiration_minutes, config.max_attempts);
        Self { sms, store, config }
    }

    /// Issue a passcode for `phone` and dispatch it via SMS.
    ///
    /// Validates the phone format before anything is generated, then
    /// creates a fresh record (overwriting and thereby invalidating any
    /// prior one) and sends the fixed-format text. No store lock is held
    /// across the send.
    ///
    /// If dispatch fails, the issuance is rolled back: the record is
    /// removed (unless a concurrent re-issue already replaced it) so no
    /// guessable code exists that the caller was never told about. The
    /// caller sees `DeliveryFailed` and may simply retry.
    ///
    /// # Returns
    ///
    /// The provider's message id on success.
    pub async fn issue(&self, phone: &str) -> OtpResult<String> {
        if !is_valid_phone_number(phone) {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "invalid_phone_format",
                "Rejected passcode request for malformed phone number"
            );
            return Err(OtpError::InvalidPhoneFormat {
                phone: phone.to_string(),
            });
        }

        let record = OtpRecord::new();
        let code = record.code.clone();
        self.store.insert(phone, record);

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_generated",
            "Generated new passcode"
        );

        let body = format!(
            "Your OTP is: {}. Valid for {} minutes.",
            code, self.config.expiration_minutes
        );

        match self.sms.send(phone, &body).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    message_id = %message_id,
                    event = "otp_dispatched",
                    "Passcode dispatched via SMS"
                );
                Ok(message_id)
            }
            Err(reason) => {
                // Roll back so no undelivered code stays guessable. The
                // code guard keeps a racing re-issue intact.
                self.store.remove_if_code_matches(phone, &code);
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %reason,
                    event = "otp_delivery_failed",
                    "SMS dispatch failed; issuance rolled back"
                );
                Err(OtpError::DeliveryFailed { reason })
            }
        }
    }

    /// Verify a submitted passcode for `phone`.
    ///
    /// Delegates to the store's policy: existence, expiry, attempt limit,
    /// then value match, in that order. Success consumes the record.
    pub fn verify(&self, phone: &str, submitted: &str) -> OtpResult<()> {
        let result = self.store.verify_at(phone, submitted, Utc::now());

        match &result {
            Ok(()) => tracing::info!(
                phone = %mask_phone_number(phone),
                event = "otp_verified",
                "Passcode verified and consumed"
            ),
            Err(error) => tracing::warn!(
                phone = %mask_phone_number(phone),
                error = %error,
                event = "otp_verification_failed",
                "Passcode verification failed"
            ),
        }

        result
    }

    /// Read access to the record store for diagnostics.
    pub fn store(&self) -> &OtpStore {
        &self.store
    }
}
