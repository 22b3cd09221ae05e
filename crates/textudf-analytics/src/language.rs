//! Script-share language detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of ASCII letters above which a text is considered English.
const LATIN_THRESHOLD: f64 = 0.7;
/// Share of script characters above which a text is attributed to that script.
const SCRIPT_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Default)]
struct ScriptCounts {
    latin: usize,
    chinese: usize,
    japanese: usize,
    korean: usize,
    arabic: usize,
    total: usize,
}

impl ScriptCounts {
    fn tally(text: &str) -> Self {
        let mut counts = Self::default();
        for ch in text.chars() {
            counts.total += 1;
            match ch {
                'a'..='z' | 'A'..='Z' => counts.latin += 1,
                '\u{4e00}'..='\u{9fff}' => counts.chinese += 1,
                '\u{3040}'..='\u{309f}' | '\u{30a0}'..='\u{30ff}' => counts.japanese += 1,
                '\u{ac00}'..='\u{d7af}' => counts.korean += 1,
                '\u{0600}'..='\u{06ff}' => counts.arabic += 1,
                _ => {}
            }
        }
        counts
    }

    fn share(&self, count: usize) -> f64 {
        count as f64 / self.total as f64
    }
}

/// Guess a text's language from the share of characters in each script.
///
/// Checks are ordered: English (ASCII letters above 70%), then Chinese,
/// Japanese, Korean, and Arabic (each above 30%). Kanji count as Chinese,
/// so Japanese text needs a kana share above 30% and a kanji share at or
/// below it.
pub fn detect_language(text: &str) -> Language {
    let counts = ScriptCounts::tally(text);
    if counts.total == 0 {
        return Language::Unknown;
    }
    if counts.share(counts.latin) > LATIN_THRESHOLD {
        Language::English
    } else if counts.share(counts.chinese) > SCRIPT_THRESHOLD {
        Language::Chinese
    } else if counts.share(counts.japanese) > SCRIPT_THRESHOLD {
        Language::Japanese
    } else if counts.share(counts.korean) > SCRIPT_THRESHOLD {
        Language::Korean
    } else if counts.share(counts.arabic) > SCRIPT_THRESHOLD {
        Language::Arabic
    } else {
        Language::Unknown
    }
}
