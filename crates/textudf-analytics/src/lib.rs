//! Text analytics functions for SQL UDFs.
//!
//! Lightweight, dictionary-driven analysis invoked per row:
//!
//! - **sentiment**: Positive / negative / neutral with simple negation
//! - **keywords**: Top keywords by frequency × length, and meaningful word counts
//! - **similarity**: Jaccard similarity of two texts' word sets
//! - **language**: Script-share language detection
//! - **clean**: Typed cleaning (HTML, emails, phones, URLs, punctuation, ...)
//! - **report**: All of the above combined into one serializable report

pub mod clean;
pub mod error;
pub mod keywords;
pub mod language;
mod lexicon;
pub mod report;
pub mod sentiment;
pub mod similarity;
mod tokenize;

pub use clean::{CleanKind, clean_text};
pub use error::AnalyticsError;
pub use keywords::{MAX_KEYWORDS, keywords, keywords_csv, meaningful_word_count};
pub use language::{Language, detect_language};
pub use report::{TextReport, analyze};
pub use sentiment::{Sentiment, sentiment};
pub use similarity::similarity;
