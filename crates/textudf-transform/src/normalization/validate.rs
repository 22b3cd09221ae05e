//! Validation verdicts.
//!
//! The UDF returns text, so verdicts are the literals [`VALID`] and
//! [`INVALID`] rather than booleans.

use crate::patterns::{contains_phone, is_email};

pub const VALID: &str = "valid";
pub const INVALID: &str = "invalid";

fn verdict(ok: bool) -> &'static str {
    if ok { VALID } else { INVALID }
}

/// `valid` if the whole value is an email address.
pub fn validate_email(value: &str) -> &'static str {
    verdict(is_email(value))
}

/// `valid` if the value contains a phone number anywhere.
pub fn validate_phone(value: &str) -> &'static str {
    verdict(contains_phone(value))
}
