//! Keyword-based sentiment classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::{NEGATION_WORDS, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::tokenize::words;

/// Overall polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the sentiment of a text.
///
/// Each positive word scores one point for positive, each negative word one
/// point for negative. A negation word flips the polarity of the next token
/// and is then forgotten, whether or not that token carried sentiment.
/// Ties (including empty text) are neutral.
pub fn sentiment(text: &str) -> Sentiment {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut negate = false;

    for word in words(text) {
        let word = word.as_str();
        if NEGATION_WORDS.contains(word) {
            negate = true;
            continue;
        }
        if POSITIVE_WORDS.contains(word) {
            if negate {
                negative += 1;
            } else {
                positive += 1;
            }
        } else if NEGATIVE_WORDS.contains(word) {
            if negate {
                positive += 1;
            } else {
                negative += 1;
            }
        }
        negate = false;
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_dictionary_words() {
        assert_eq!(sentiment("This product is amazing!"), Sentiment::Positive);
        assert_eq!(sentiment("Terrible, broken on arrival"), Sentiment::Negative);
        assert_eq!(sentiment("It arrived on Tuesday"), Sentiment::Neutral);
        assert_eq!(sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn negation_flips_next_token_only() {
        assert_eq!(sentiment("not good"), Sentiment::Negative);
        assert_eq!(sentiment("never bad"), Sentiment::Positive);
        // The intervening token consumes the negation.
        assert_eq!(sentiment("not very good"), Sentiment::Positive);
    }

    #[test]
    fn mixed_signals_tie_to_neutral() {
        assert_eq!(sentiment("good but bad"), Sentiment::Neutral);
    }
}
