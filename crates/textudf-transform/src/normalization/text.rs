//! Initials, reversal, and counting.

/// Upper-cased first character of each whitespace-delimited word.
pub fn initials(value: &str) -> String {
    value
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Reverse character order.
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Number of whitespace-delimited words, as decimal text.
///
/// Blank input has zero words. A regex split on `\s+` would report one
/// (empty) word for `""`; this counts tokens instead.
pub fn word_count(value: &str) -> String {
    value.split_whitespace().count().to_string()
}

/// Number of characters (Unicode scalar values), whitespace included.
pub fn char_count(value: &str) -> String {
    value.chars().count().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_extra_whitespace() {
        assert_eq!(initials("  john   michael\tsmith "), "JMS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn counts() {
        assert_eq!(word_count("Hello world example"), "3");
        assert_eq!(word_count("   "), "0");
        assert_eq!(word_count(""), "0");
        assert_eq!(char_count(" héllo "), "7");
    }
}
