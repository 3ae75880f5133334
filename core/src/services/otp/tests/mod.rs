//! Tests for the OTP manager
