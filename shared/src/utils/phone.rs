//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Accepted format: leading '+', 1-3 digit country code, then exactly
// 10 subscriber digits (e.g. +14155552671, +8613812345678).
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+\d{1,3}\d{10}$").expect("phone regex is valid")
});

/// Check whether a phone number matches the accepted format.
///
/// The service only accepts numbers of the form `+<country code><subscriber
/// number>` where the country code is 1-3 digits and the subscriber number
/// is exactly 10 digits. Anything else is rejected before an OTP is
/// generated or dispatched.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Strip everything but digits and '+' from a phone number.
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for logging (e.g. `+141****2671`).
///
/// Full phone numbers never appear in log output. The input is normalized
/// to ASCII digits and '+' first; masking runs on untrusted request bodies
/// before validation, so it must tolerate arbitrary input.
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 8 {
        format!(
            "{}****{}",
            &normalized[0..4],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
