//! Character-class extraction.

/// Concatenate every ASCII digit run in order of appearance.
///
/// Returns `None` when the value contains no digits.
///
/// # Examples
///
/// ```
/// use textudf_transform::normalization::extract_numbers;
///
/// assert_eq!(extract_numbers("Order123Items456").as_deref(), Some("123456"));
/// assert_eq!(extract_numbers("no digits"), None);
/// ```
pub fn extract_numbers(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    (!digits.is_empty()).then_some(digits)
}

/// Keep only ASCII letters.
pub fn extract_letters(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Keep ASCII letters, ASCII digits, and whitespace.
pub fn remove_special(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || ch.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_special_keeps_unicode_whitespace() {
        assert_eq!(remove_special("a\u{A0}b!"), "a\u{A0}b");
        assert_eq!(remove_special("tab\there?"), "tab\there");
    }
}
