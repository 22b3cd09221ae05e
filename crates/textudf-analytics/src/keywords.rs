//! Keyword extraction and meaningful word counts.

use std::collections::HashMap;

use crate::lexicon::{COUNT_STOP_WORDS, KEYWORD_STOP_WORDS, MIN_WORD_CHARS};
use crate::tokenize::{char_len, words};

/// Maximum number of keywords returned by [`keywords`].
pub const MAX_KEYWORDS: usize = 5;

/// Extract up to [`MAX_KEYWORDS`] keywords from a text.
///
/// Stop words and words of two characters or fewer are ignored. Each
/// remaining word scores `frequency × character length`; higher scores come
/// first and ties keep first-appearance order.
///
/// # Examples
///
/// ```
/// use textudf_analytics::keywords;
///
/// assert_eq!(
///     keywords("The quick brown fox jumps over the lazy dog"),
///     vec!["quick", "brown", "jumps", "over", "lazy"]
/// );
/// ```
pub fn keywords(text: &str) -> Vec<String> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for word in words(text) {
        if KEYWORD_STOP_WORDS.contains(word.as_str()) || char_len(&word) <= MIN_WORD_CHARS {
            continue;
        }
        match index.get(&word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    let mut scored: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, freq)| {
            let score = freq * char_len(&word);
            (word, score)
        })
        .collect();
    // Stable sort keeps first-appearance order among equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

/// Keywords joined with commas, as the UDF returns them.
pub fn keywords_csv(text: &str) -> String {
    keywords(text).join(",")
}

/// Count words that are not common stop words and are longer than two
/// characters.
pub fn meaningful_word_count(text: &str) -> usize {
    words(text)
        .iter()
        .filter(|word| !COUNT_STOP_WORDS.contains(word.as_str()) && char_len(word) > MIN_WORD_CHARS)
        .count()
}
