use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid word regex"));

/// Lower-cased word tokens in order of appearance.
pub(crate) fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}
