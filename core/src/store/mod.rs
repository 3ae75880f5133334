//! Concurrency-safe keyed record store
//!
//! Maps phone numbers to their active [`OtpRecord`]. Built on `DashMap` so
//! that a read-modify-write for one number happens as an atomic unit (the
//! entry holds its shard lock for the whole policy decision) while numbers
//! on other shards proceed unblocked. This serializes racing verifies for
//! the same number: attempt counts cannot be lost and a code cannot be
//! consumed twice.
//!
//! Expiry is lazy: it is enforced only when a record is next accessed. An
//! expired-but-unaccessed record lingers until the next verify for that
//! number or a future issuance overwrites it. There is no background
//! sweeper.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::otp_record::OtpRecord;
use crate::errors::{OtpError, OtpResult};

/// In-memory record store with per-key atomicity and lazy expiry.
///
/// Scoped to the process lifetime: a restart drops all outstanding
/// passcodes, which simply means users request a fresh one.
pub struct OtpStore {
    records: DashMap<String, OtpRecord>,
    expiration_minutes: i64,
    max_attempts: u32,
}

impl OtpStore {
    /// Create a store with the given expiry window and attempt limit.
    pub fn new(expiration_minutes: i64, max_attempts: u32) -> Self {
        Self {
            records: DashMap::new(),
            expiration_minutes,
            max_attempts,
        }
    }

    /// Insert a fresh record, unconditionally replacing any prior record
    /// for the number. The old passcode is invalidated by replacement.
    pub fn insert(&self, phone: &str, record: OtpRecord) {
        self.records.insert(phone.to_string(), record);
    }

    /// Apply the verification policy for `phone` against `submitted` at
    /// the given instant.
    ///
    /// Checks run in a fixed order: existence, expiry, attempt limit,
    /// value match. The order determines which error wins when several
    /// conditions hold at once (an expired record with exhausted attempts
    /// reports `Expired`).
    ///
    /// Side effects per outcome:
    /// - `Expired` / `TooManyAttempts`: the record is deleted.
    /// - match: the record is deleted (single use) and `Ok` is returned.
    /// - mismatch: the attempt counter is incremented in place; if that
    ///   increment reaches the limit the record is deleted and the error
    ///   is `TooManyAttempts` instead of `Mismatch`.
    ///
    /// The whole decision runs under the entry's shard lock, so two racing
    /// verifies for one number cannot both consume the code.
    pub fn verify_at(
        &self,
        phone: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> OtpResult<()> {
        match self.records.entry(phone.to_string()) {
            Entry::Vacant(_) => Err(OtpError::NotFound),
            Entry::Occupied(mut entry) => {
                if entry.get().is_expired(now, self.expiration_minutes) {
                    entry.remove();
                    return Err(OtpError::Expired);
                }

                if entry.get().is_exhausted(self.max_attempts) {
                    entry.remove();
                    return Err(OtpError::TooManyAttempts);
                }

                if entry.get().matches(submitted) {
                    // Single use: consume on success.
                    entry.remove();
                    return Ok(());
                }

                let record = entry.get_mut();
                record.attempts += 1;
                if record.attempts >= self.max_attempts {
                    entry.remove();
                    return Err(OtpError::TooManyAttempts);
                }
                Err(OtpError::Mismatch)
            }
        }
    }

    /// Remove the record for `phone` only if it still holds `code`.
    ///
    /// Used to roll back an issuance whose SMS dispatch failed. The guard
    /// on the code prevents a concurrent re-issuance (which replaced the
    /// record) from being rolled back by the loser of the race.
    pub fn remove_if_code_matches(&self, phone: &str, code: &str) {
        self.records.remove_if(phone, |_, record| record.code == code);
    }

    /// Whether a record exists for the number (expiry not consulted).
    pub fn contains(&self, phone: &str) -> bool {
        self.records.contains_key(phone)
    }

    /// Number of records currently stored, expired ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::otp_record::{CODE_EXPIRATION_MINUTES, MAX_ATTEMPTS};
    use chrono::Duration;
    use std::sync::Arc;

    fn store() -> OtpStore {
        OtpStore::new(CODE_EXPIRATION_MINUTES, MAX_ATTEMPTS)
    }

    fn record_with(code: &str) -> OtpRecord {
        OtpRecord {
            code: code.to_string(),
            attempts: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_verify_without_record_is_not_found() {
        let store = store();
        assert_eq!(
            store.verify_at("+14155552671", "123456", Utc::now()),
            Err(OtpError::NotFound)
        );
    }

    #[test]
    fn test_match_consumes_record() {
        let store = store();
        store.insert("+14155552671", record_with("123456"));

        assert_eq!(store.verify_at("+14155552671", "123456", Utc::now()), Ok(()));

        // Consumed is indistinguishable from never issued.
        assert_eq!(
            store.verify_at("+14155552671", "123456", Utc::now()),
            Err(OtpError::NotFound)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_mismatch_increments_until_exhaustion() {
        let store = store();
        store.insert("+14155552671", record_with("123456"));

        assert_eq!(
            store.verify_at("+14155552671", "000000", Utc::now()),
            Err(OtpError::Mismatch)
        );
        assert_eq!(
            store.verify_at("+14155552671", "111111", Utc::now()),
            Err(OtpError::Mismatch)
        );

        // Third wrong submission exhausts the record and reports the
        // attempt limit, not a plain mismatch.
        assert_eq!(
            store.verify_at("+14155552671", "222222", Utc::now()),
            Err(OtpError::TooManyAttempts)
        );
        assert!(!store.contains("+14155552671"));

        // The correct code is gone with the record.
        assert_eq!(
            store.verify_at("+14155552671", "123456", Utc::now()),
            Err(OtpError::NotFound)
        );
    }

    #[test]
    fn test_correct_code_still_works_on_last_attempt() {
        let store = store();
        store.insert("+14155552671", record_with("123456"));

        store.verify_at("+14155552671", "000000", Utc::now()).unwrap_err();
        store.verify_at("+14155552671", "111111", Utc::now()).unwrap_err();

        // Two failures recorded; the correct code must still consume.
        assert_eq!(store.verify_at("+14155552671", "123456", Utc::now()), Ok(()));
    }

    #[test]
    fn test_expired_record_is_deleted_even_for_correct_code() {
        let store = store();
        let mut record = record_with("123456");
        record.created_at = Utc::now() - Duration::minutes(CODE_EXPIRATION_MINUTES + 1);
        store.insert("+14155552671", record);

        assert_eq!(
            store.verify_at("+14155552671", "123456", Utc::now()),
            Err(OtpError::Expired)
        );
        assert!(!store.contains("+14155552671"));
    }

    #[test]
    fn test_expiry_checked_before_attempt_limit() {
        let store = store();
        let mut record = record_with("123456");
        record.created_at = Utc::now() - Duration::minutes(CODE_EXPIRATION_MINUTES + 1);
        record.attempts = MAX_ATTEMPTS;
        store.insert("+14155552671", record);

        // Both conditions hold; expiry is checked first and wins.
        assert_eq!(
            store.verify_at("+14155552671", "123456", Utc::now()),
            Err(OtpError::Expired)
        );
    }

    #[test]
    fn test_exhausted_record_is_rejected_and_deleted() {
        let store = store();
        let mut record = record_with("123456");
        record.attempts = MAX_ATTEMPTS;
        store.insert("+14155552671", record);

        assert_eq!(
            store.verify_at("+14155552671", "123456", Utc::now()),
            Err(OtpError::TooManyAttempts)
        );
        assert!(!store.contains("+14155552671"));
    }

    #[test]
    fn test_reissue_overwrites_and_old_code_mismatches() {
        let store = store();
        store.insert("+14155552671", record_with("111111"));
        store.insert("+14155552671", record_with("222222"));

        // The old code is compared against the new record.
        assert_eq!(
            store.verify_at("+14155552671", "111111", Utc::now()),
            Err(OtpError::Mismatch)
        );
        // The fresh attempt counter took the hit, and the new code works.
        assert_eq!(store.verify_at("+14155552671", "222222", Utc::now()), Ok(()));
    }

    #[test]
    fn test_reissue_resets_attempts() {
        let store = store();
        store.insert("+14155552671", record_with("111111"));
        store.verify_at("+14155552671", "000000", Utc::now()).unwrap_err();
        store.verify_at("+14155552671", "999999", Utc::now()).unwrap_err();

        store.insert("+14155552671", record_with("222222"));

        // Two wrong guesses against the fresh record still leave room.
        store.verify_at("+14155552671", "000000", Utc::now()).unwrap_err();
        store.verify_at("+14155552671", "999999", Utc::now()).unwrap_err();
        assert_eq!(store.verify_at("+14155552671", "222222", Utc::now()), Ok(()));
    }

    #[test]
    fn test_remove_if_code_matches_guards_against_reissue() {
        let store = store();
        store.insert("+14155552671", record_with("111111"));

        // A concurrent re-issuance replaced the record; rollback of the
        // old issuance must not delete the new one.
        store.insert("+14155552671", record_with("222222"));
        store.remove_if_code_matches("+14155552671", "111111");
        assert!(store.contains("+14155552671"));

        store.remove_if_code_matches("+14155552671", "222222");
        assert!(!store.contains("+14155552671"));
    }

    #[test]
    fn test_concurrent_verify_consumes_exactly_once() {
        let store = Arc::new(store());
        store.insert("+14155552671", record_with("123456"));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.verify_at("+14155552671", "123456", Utc::now())
            }));
        }

        let results: Vec<OtpResult<()>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| r == &Err(OtpError::NotFound)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_mismatches_lose_no_attempts() {
        let store = Arc::new(store());
        store.insert("+14155552671", record_with("123456"));

        let mut handles = Vec::new();
        for _ in 0..2 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.verify_at("+14155552671", "000000", Utc::now())
            }));
        }
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Err(OtpError::Mismatch));
        }

        // Both failed attempts were recorded; one more exhausts the record.
        assert_eq!(
            store.verify_at("+14155552671", "000000", Utc::now()),
            Err(OtpError::TooManyAttempts)
        );
    }
}
