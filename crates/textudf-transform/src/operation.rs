//! Operation identifiers accepted by the two-argument UDF form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OperationError;

/// A string transform selected by name.
///
/// Names are matched case-insensitively; surrounding whitespace is not
/// stripped, so `" upper"` is not a recognized operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Collapse whitespace, trim, and title-case every word.
    Clean,
    Upper,
    Lower,
    /// Concatenate every ASCII digit run.
    ExtractNumbers,
    /// Keep only ASCII letters.
    ExtractLetters,
    MaskEmail,
    MaskPhone,
    ValidateEmail,
    ValidatePhone,
    /// Keep ASCII alphanumerics and whitespace.
    RemoveSpecial,
    Slug,
    Initials,
    Reverse,
    WordCount,
    CharCount,
}

impl Operation {
    /// Every operation, in the order they are documented.
    pub const ALL: [Operation; 15] = [
        Operation::Clean,
        Operation::Upper,
        Operation::Lower,
        Operation::ExtractNumbers,
        Operation::ExtractLetters,
        Operation::MaskEmail,
        Operation::MaskPhone,
        Operation::ValidateEmail,
        Operation::ValidatePhone,
        Operation::RemoveSpecial,
        Operation::Slug,
        Operation::Initials,
        Operation::Reverse,
        Operation::WordCount,
        Operation::CharCount,
    ];

    /// Returns the canonical (lowercase) operation name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Clean => "clean",
            Operation::Upper => "upper",
            Operation::Lower => "lower",
            Operation::ExtractNumbers => "extract_numbers",
            Operation::ExtractLetters => "extract_letters",
            Operation::MaskEmail => "mask_email",
            Operation::MaskPhone => "mask_phone",
            Operation::ValidateEmail => "validate_email",
            Operation::ValidatePhone => "validate_phone",
            Operation::RemoveSpecial => "remove_special",
            Operation::Slug => "slug",
            Operation::Initials => "initials",
            Operation::Reverse => "reverse",
            Operation::WordCount => "word_count",
            Operation::CharCount => "char_count",
        }
    }

    /// One-line description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Clean => "Collapse whitespace, trim, and title-case each word",
            Operation::Upper => "Convert to upper case",
            Operation::Lower => "Convert to lower case",
            Operation::ExtractNumbers => "Concatenate all digit runs (NULL when none)",
            Operation::ExtractLetters => "Keep only ASCII letters",
            Operation::MaskEmail => "Mask the local part and first domain label of an email",
            Operation::MaskPhone => "Mask all but the last four digits of a phone number",
            Operation::ValidateEmail => "Return 'valid' or 'invalid' for an email address",
            Operation::ValidatePhone => "Return 'valid' or 'invalid' for a phone number",
            Operation::RemoveSpecial => "Remove everything except letters, digits, and whitespace",
            Operation::Slug => "Build a lowercase, hyphen-delimited URL slug",
            Operation::Initials => "Upper-cased first character of each word",
            Operation::Reverse => "Reverse character order",
            Operation::WordCount => "Number of whitespace-delimited words",
            Operation::CharCount => "Number of characters, whitespace included",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == normalized)
            .ok_or_else(|| OperationError::Unknown {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("UPPER".parse::<Operation>(), Ok(Operation::Upper));
        assert_eq!("Mask_Email".parse::<Operation>(), Ok(Operation::MaskEmail));
        assert_eq!("slug".parse::<Operation>(), Ok(Operation::Slug));
    }

    #[test]
    fn rejects_unknown_and_padded_names() {
        assert_eq!(
            "titlecase".parse::<Operation>(),
            Err(OperationError::Unknown {
                name: "titlecase".to_string()
            })
        );
        assert!(" upper".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn names_round_trip_through_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn serializes_as_snake_case_name() {
        assert_eq!(
            serde_json::to_string(&Operation::ExtractNumbers).unwrap(),
            "\"extract_numbers\""
        );
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.as_str()));
            assert_eq!(serde_json::from_str::<Operation>(&json).unwrap(), op);
        }
    }
}
