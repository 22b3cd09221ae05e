//! Email and phone grammars.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, domain, and a final dot followed by two or more letters.
/// Must match the whole value.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Optional country code, optional (parenthesized) area code separators,
/// then 3 + 4 digits. Separators are space, hyphen, or dot. May match
/// anywhere in the value.
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?[0-9]{1,3})?[-. ]?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}")
        .expect("Invalid phone regex")
});

/// Returns true if the whole value is an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns true if the value contains a phone number.
pub fn contains_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}
