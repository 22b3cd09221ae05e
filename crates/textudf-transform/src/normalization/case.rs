//! Default cleaning: whitespace normalization and title casing.

/// Clean a free-text value for display.
///
/// Collapses every whitespace run to a single space, trims both ends, and
/// title-cases the result. Returns `None` for blank input.
///
/// # Examples
///
/// ```
/// use textudf_transform::normalization::clean;
///
/// assert_eq!(clean(" Hello World ").as_deref(), Some("Hello World"));
/// assert_eq!(clean("mARY\t\tjane o'neil").as_deref(), Some("Mary Jane O'neil"));
/// assert_eq!(clean("   "), None);
/// ```
pub fn clean(value: &str) -> Option<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }
    Some(title_case(&collapsed))
}

/// Upper-case the first letter of each whitespace-delimited run and
/// lower-case every other letter.
///
/// Non-letters pass through unchanged and do not end a word; only
/// whitespace resets the start-of-word state.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut capitalize_next = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if capitalize_next {
                result.extend(ch.to_uppercase());
                capitalize_next = false;
            } else {
                result.extend(ch.to_lowercase());
            }
        } else {
            result.push(ch);
            if ch.is_whitespace() {
                capitalize_next = true;
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_do_not_consume_the_capital() {
        assert_eq!(title_case("3rd street"), "3Rd Street");
        assert_eq!(title_case("(ann) lee"), "(Ann) Lee");
    }

    #[test]
    fn hyphen_does_not_start_a_word() {
        assert_eq!(title_case("jean-luc PICARD"), "Jean-luc Picard");
    }

    #[test]
    fn no_break_space_is_whitespace() {
        assert_eq!(clean("\u{A0}"), None);
        assert_eq!(clean("a\u{A0}\u{A0}b").as_deref(), Some("A B"));
    }

    #[test]
    fn clean_collapses_mixed_whitespace() {
        assert_eq!(clean("\n  a \t b\r\n").as_deref(), Some("A B"));
    }
}
