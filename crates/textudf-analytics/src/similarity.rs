//! Word-set similarity.

use std::collections::HashSet;

use crate::tokenize::words;

/// Jaccard similarity (intersection over union) of two texts' word sets.
///
/// Returns a value in `0.0..=1.0`; `0.0` when either text is empty or
/// neither contains any words.
///
/// # Examples
///
/// ```
/// use textudf_analytics::similarity;
///
/// assert_eq!(similarity("hello world", "hello earth"), 1.0 / 3.0);
/// assert_eq!(similarity("Same Words", "words same"), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let left: HashSet<String> = words(a).into_iter().collect();
    let right: HashSet<String> = words(b).into_iter().collect();
    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = left.intersection(&right).count();
    intersection as f64 / union as f64
}
