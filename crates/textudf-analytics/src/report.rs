//! Combined analytics report.

use serde::Serialize;

use crate::keywords::{keywords, meaningful_word_count};
use crate::language::{Language, detect_language};
use crate::sentiment::{Sentiment, sentiment};

/// Every single-text analytics result for one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReport {
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub language: Language,
    pub meaningful_words: usize,
    pub characters: usize,
}

/// Run every single-text analysis on a value.
pub fn analyze(text: &str) -> TextReport {
    TextReport {
        sentiment: sentiment(text),
        keywords: keywords(text),
        language: detect_language(text),
        meaningful_words: meaningful_word_count(text),
        characters: text.chars().count(),
    }
}
