//! String transforms behind each [`Operation`](crate::Operation).
//!
//! This module provides the individual transforms the dispatcher routes to:
//! - **case**: Whitespace cleanup and title casing
//! - **extract**: Digit, letter, and alphanumeric filtering
//! - **mask**: Privacy masking for emails and phone numbers
//! - **validate**: `valid`/`invalid` verdicts for emails and phone numbers
//! - **slug**: URL slug generation
//! - **text**: Initials, reversal, and counting
//!
//! "Whitespace" means Unicode `White_Space` throughout, not just ASCII
//! `\s`: a no-break space (U+00A0) is trimmed by `clean`, separates words
//! in `slug`, and survives `remove_special`.

pub mod case;
pub mod extract;
pub mod mask;
pub mod slug;
pub mod text;
pub mod validate;

// Re-export commonly used items
pub use case::{clean, title_case};
pub use extract::{extract_letters, extract_numbers, remove_special};
pub use mask::{mask_email, mask_phone, mask_string};
pub use slug::slug;
pub use text::{char_count, initials, reverse, word_count};
pub use validate::{INVALID, VALID, validate_email, validate_phone};
