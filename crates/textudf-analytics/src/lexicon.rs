//! Word lists used by the analytics functions.

use std::collections::HashSet;
use std::sync::LazyLock;

pub(crate) static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "fantastic",
        "awesome",
        "perfect",
        "love",
        "like",
        "best",
        "brilliant",
        "outstanding",
        "superb",
        "magnificent",
        "terrific",
        "marvelous",
        "happy",
        "pleased",
        "satisfied",
        "delighted",
        "thrilled",
    ])
});

pub(crate) static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "bad",
        "terrible",
        "awful",
        "horrible",
        "disgusting",
        "hate",
        "dislike",
        "worst",
        "pathetic",
        "useless",
        "disappointing",
        "frustrated",
        "angry",
        "sad",
        "upset",
        "annoyed",
        "furious",
        "poor",
        "inferior",
        "defective",
        "broken",
        "failed",
    ])
});

/// Words that flip the polarity of the next sentiment-bearing token.
pub(crate) static NEGATION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "not", "no", "never", "nothing", "nowhere", "nobody", "none", "neither", "nor", "cannot",
        "cant", "wont", "dont",
    ])
});

/// Stop words excluded from keyword extraction.
pub(crate) static KEYWORD_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they",
    ])
});

/// Shorter stop list used for meaningful word counts.
pub(crate) static COUNT_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "is", "are", "was", "were",
    ])
});

/// Minimum character length (exclusive) for keywords and meaningful words.
pub(crate) const MIN_WORD_CHARS: usize = 2;
