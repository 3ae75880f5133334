//! OTP record entity for SMS-based authentication.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Maximum number of failed verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Expiration window for a passcode (5 minutes)
pub const CODE_EXPIRATION_MINUTES: i64 = 5;

/// The active OTP state for a single phone number.
///
/// At most one record exists per phone number; issuing a new passcode
/// overwrites any prior record. All terminal states (consumed, expired,
/// exhausted) are represented by the record's absence from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The 6-digit passcode
    pub code: String,

    /// Number of failed verification attempts made so far
    pub attempts: u32,

    /// Timestamp when the passcode was generated
    pub created_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a fresh record with a cryptographically random 6-digit code,
    /// zero attempts, and `created_at` set to now.
    pub fn new() -> Self {
        Self {
            code: Self::generate_code(),
            attempts: 0,
            created_at: Utc::now(),
        }
    }

    /// Generates a random 6-digit passcode drawn uniformly from
    /// [100000, 999999] using the OS CSPRNG.
    ///
    /// `gen_range` rejects out-of-range draws rather than reducing modulo,
    /// so the distribution is exactly uniform.
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks whether the record has outlived the expiry window at `now`.
    ///
    /// Expiry is strict: a record is expired once more than
    /// `expiration_minutes` have elapsed since creation.
    pub fn is_expired(&self, now: DateTime<Utc>, expiration_minutes: i64) -> bool {
        now - self.created_at > Duration::minutes(expiration_minutes)
    }

    /// Checks whether the attempt limit has been reached.
    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Compares a submitted code against the stored one in constant time.
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }
}

impl Default for OtpRecord {
    fn default() -> Self {
        Self::new()
    }
}
