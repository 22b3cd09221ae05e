//! UDF entry points.
//!
//! The host engine calls one of two forms per row:
//!
//! - `string_utils(value)` maps to [`evaluate`]
//! - `string_utils(value, operation)` maps to [`evaluate_with`]
//!
//! A SQL NULL arrives as `None` and comes back as `None` from every
//! operation. No operation fails: unrecognized operation names return the
//! input unchanged.

use tracing::{debug, trace};

use crate::normalization::{
    char_count, clean, extract_letters, extract_numbers, initials, mask_email, mask_phone,
    remove_special, reverse, slug, validate_email, validate_phone, word_count,
};
use crate::operation::Operation;

/// Default cleaning: collapse whitespace, trim, and title-case.
///
/// Returns `None` for absent or blank input.
pub fn evaluate(input: Option<&str>) -> Option<String> {
    input.and_then(clean)
}

/// Apply the named operation, defaulting to cleaning when no name is given.
///
/// # Examples
///
/// ```
/// use textudf_transform::evaluate_with;
///
/// assert_eq!(evaluate_with(Some("Hello World!"), Some("SLUG")).as_deref(), Some("hello-world"));
/// assert_eq!(evaluate_with(Some("keep me"), Some("no_such_op")).as_deref(), Some("keep me"));
/// assert_eq!(evaluate_with(None, Some("upper")), None);
/// ```
pub fn evaluate_with(input: Option<&str>, operation: Option<&str>) -> Option<String> {
    let input = input?;
    let Some(name) = operation else {
        return clean(input);
    };
    match name.parse::<Operation>() {
        Ok(op) => op.apply(input),
        Err(error) => {
            debug!(%error, "returning input unchanged");
            Some(input.to_string())
        }
    }
}

impl Operation {
    /// Apply this operation to a present value.
    ///
    /// Returns `None` only for [`Operation::Clean`] on blank input and
    /// [`Operation::ExtractNumbers`] on input without digits.
    pub fn apply(&self, input: &str) -> Option<String> {
        trace!(operation = %self, "applying string operation");
        let output = match self {
            Operation::Clean => return clean(input),
            Operation::Upper => input.to_uppercase(),
            Operation::Lower => input.to_lowercase(),
            Operation::ExtractNumbers => return extract_numbers(input),
            Operation::ExtractLetters => extract_letters(input),
            Operation::MaskEmail => mask_email(input),
            Operation::MaskPhone => mask_phone(input),
            Operation::ValidateEmail => validate_email(input).to_string(),
            Operation::ValidatePhone => validate_phone(input).to_string(),
            Operation::RemoveSpecial => remove_special(input),
            Operation::Slug => slug(input),
            Operation::Initials => initials(input),
            Operation::Reverse => reverse(input),
            Operation::WordCount => word_count(input),
            Operation::CharCount => char_count(input),
        };
        Some(output)
    }
}
