//! Typed text cleaning.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalyticsError;

static HTML_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid HTML tag regex"));

static EMAIL_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("Invalid email token regex"));

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3})?[\s.-]?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
        .expect("Invalid phone regex")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|%[0-9a-fA-F]{2})+")
        .expect("Invalid URL regex")
});

static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"));

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digits regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Entities decoded after HTML tags are stripped, in decoding order.
const HTML_ENTITIES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// What to remove from a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanKind {
    /// Strip tags and decode common entities.
    Html,
    /// Remove anything shaped like `user@host`.
    Email,
    Phone,
    /// Remove `http://` and `https://` URLs.
    Url,
    /// Remove everything that is neither a word character nor whitespace.
    Punctuation,
    Numbers,
    /// Collapse whitespace runs to one space and trim.
    Whitespace,
    /// Html, email, phone, url, punctuation, then whitespace.
    All,
}

impl CleanKind {
    pub const ALL: [CleanKind; 8] = [
        CleanKind::Html,
        CleanKind::Email,
        CleanKind::Phone,
        CleanKind::Url,
        CleanKind::Punctuation,
        CleanKind::Numbers,
        CleanKind::Whitespace,
        CleanKind::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CleanKind::Html => "html",
            CleanKind::Email => "email",
            CleanKind::Phone => "phone",
            CleanKind::Url => "url",
            CleanKind::Punctuation => "punctuation",
            CleanKind::Numbers => "numbers",
            CleanKind::Whitespace => "whitespace",
            CleanKind::All => "all",
        }
    }

    /// Apply this cleaning to a text.
    pub fn apply(&self, text: &str) -> String {
        match self {
            CleanKind::Html => strip_html(text),
            CleanKind::Email => EMAIL_TOKEN_REGEX.replace_all(text, "").into_owned(),
            CleanKind::Phone => PHONE_REGEX.replace_all(text, "").into_owned(),
            CleanKind::Url => URL_REGEX.replace_all(text, "").into_owned(),
            CleanKind::Punctuation => PUNCTUATION_REGEX.replace_all(text, "").into_owned(),
            CleanKind::Numbers => DIGITS_REGEX.replace_all(text, "").into_owned(),
            CleanKind::Whitespace => collapse_whitespace(text),
            CleanKind::All => {
                let mut result = HTML_TAG_REGEX.replace_all(text, "").into_owned();
                for regex in [&EMAIL_TOKEN_REGEX, &PHONE_REGEX, &URL_REGEX, &PUNCTUATION_REGEX] {
                    result = regex.replace_all(&result, "").into_owned();
                }
                collapse_whitespace(&result)
            }
        }
    }
}

impl fmt::Display for CleanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CleanKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        CleanKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| AnalyticsError::UnknownCleanKind {
                name: s.to_string(),
            })
    }
}

fn strip_html(text: &str) -> String {
    let mut result = HTML_TAG_REGEX.replace_all(text, "").into_owned();
    for (entity, decoded) in HTML_ENTITIES {
        result = result.replace(entity, decoded);
    }
    result
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

/// Clean a text by kind name.
///
/// Empty text, a missing kind, or an unrecognized kind return the text
/// unchanged.
///
/// # Examples
///
/// ```
/// use textudf_analytics::clean_text;
///
/// assert_eq!(clean_text("<b>Fish &amp; Chips</b>", Some("html")), "Fish & Chips");
/// assert_eq!(clean_text("  too   many  spaces ", Some("whitespace")), "too many spaces");
/// assert_eq!(clean_text("left alone", Some("sparkle")), "left alone");
/// ```
pub fn clean_text(text: &str, kind: Option<&str>) -> String {
    if text.is_empty() {
        return String::new();
    }
    let Some(name) = kind else {
        return text.to_string();
    };
    match name.parse::<CleanKind>() {
        Ok(kind) => kind.apply(text),
        Err(error) => {
            debug!(%error, "returning text unchanged");
            text.to_string()
        }
    }
}
