//! Privacy masking for display.

use crate::patterns::{contains_phone, is_email};

const MASK: char = '*';

/// Number of trailing digits left visible by [`mask_phone`].
pub const PHONE_VISIBLE_DIGITS: usize = 4;

/// Mask the interior of a string, keeping its first and last character.
///
/// Strings of two characters or fewer are masked entirely. The output always
/// has the same character count as the input.
///
/// # Examples
///
/// ```
/// use textudf_transform::normalization::mask_string;
///
/// assert_eq!(mask_string("example"), "e*****e");
/// assert_eq!(mask_string("ab"), "**");
/// assert_eq!(mask_string(""), "");
/// ```
pub fn mask_string(value: &str) -> String {
    let len = value.chars().count();
    if len <= 2 {
        return MASK.to_string().repeat(len);
    }
    let mut masked = String::with_capacity(value.len());
    for (idx, ch) in value.chars().enumerate() {
        if idx == 0 || idx == len - 1 {
            masked.push(ch);
        } else {
            masked.push(MASK);
        }
    }
    masked
}

/// Mask an email address's local part and first domain label.
///
/// Everything from the first `.` of the domain onward is kept as is.
/// Values that are not email addresses are returned unchanged.
///
/// # Examples
///
/// ```
/// use textudf_transform::normalization::mask_email;
///
/// assert_eq!(mask_email("user@example.com"), "u**r@e*****e.com");
/// assert_eq!(mask_email("jo@mail.example.co.uk"), "**@m**l.example.co.uk");
/// assert_eq!(mask_email("not an email"), "not an email");
/// ```
pub fn mask_email(value: &str) -> String {
    if !is_email(value) {
        return value.to_string();
    }
    let Some((local, domain)) = value.split_once('@') else {
        return value.to_string();
    };
    match domain.split_once('.') {
        Some((label, suffix)) => format!(
            "{}@{}.{}",
            mask_string(local),
            mask_string(label),
            suffix
        ),
        None => format!("{}@{}", mask_string(local), mask_string(domain)),
    }
}

/// Mask a phone number, leaving only its last four digits visible.
///
/// All non-digit characters are dropped from the output. Values without a
/// recognizable phone number, or with fewer than four digits, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use textudf_transform::normalization::mask_phone;
///
/// assert_eq!(mask_phone("(555) 123-4567"), "******4567");
/// assert_eq!(mask_phone("ext. 42"), "ext. 42");
/// ```
pub fn mask_phone(value: &str) -> String {
    if !contains_phone(value) {
        return value.to_string();
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < PHONE_VISIBLE_DIGITS {
        return value.to_string();
    }
    let hidden = digits.len() - PHONE_VISIBLE_DIGITS;
    let mut masked = MASK.to_string().repeat(hidden);
    masked.push_str(&digits[hidden..]);
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_string_preserves_char_count() {
        for value in ["a", "ab", "abc", "ünïcödé", "x y z"] {
            assert_eq!(
                mask_string(value).chars().count(),
                value.chars().count(),
                "{value}"
            );
        }
    }

    #[test]
    fn mask_string_keeps_multibyte_edges() {
        assert_eq!(mask_string("éclairé"), "é*****é");
    }

    #[test]
    fn mask_email_short_parts_fully_masked() {
        assert_eq!(mask_email("a@bc.io"), "*@**.io");
    }

    #[test]
    fn mask_phone_counts_every_digit_in_value() {
        // Country code digits are masked along with the rest.
        assert_eq!(mask_phone("+1 555 123 4567"), "*******4567");
    }
}
