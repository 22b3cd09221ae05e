//! URL slug generation.

/// Build a lowercase, hyphen-delimited slug.
///
/// Lower-cases the value, drops every character other than `[a-z0-9]`,
/// whitespace, and `-`, then joins the remaining alphanumeric runs with a
/// single hyphen wherever whitespace or hyphens separated them. The result
/// never starts or ends with a hyphen.
///
/// Dropped characters do not separate words: `"don't"` becomes `"dont"`.
///
/// # Examples
///
/// ```
/// use textudf_transform::normalization::slug;
///
/// assert_eq!(slug("Hello World!"), "hello-world");
/// assert_eq!(slug("  --Rust  &  Go--  "), "rust-go");
/// ```
pub fn slug(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apostrophes_join_words() {
        assert_eq!(slug("Don't Panic"), "dont-panic");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(slug("a---b - c"), "a-b-c");
    }

    #[test]
    fn non_ascii_letters_dropped() {
        assert_eq!(slug("Café Münster"), "caf-mnster");
    }

    #[test]
    fn no_break_space_separates_words() {
        assert_eq!(slug("a\u{A0}b"), "a-b");
    }

    #[test]
    fn punctuation_only_yields_empty() {
        assert_eq!(slug("!!! ???"), "");
    }
}
