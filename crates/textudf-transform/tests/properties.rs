//! Property-based tests for operation invariants.
//!
//! These tests check idempotence, involution, and pass-through behavior
//! across generated inputs.

use proptest::prelude::*;
use textudf_transform::{Operation, evaluate_with};

/// Mixed ASCII, punctuation, whitespace, and a few accented letters.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \t.,!?@#_'àéîõüÉ-]{0,60}"
}

fn apply(op: Operation, value: &str) -> String {
    op.apply(value).expect("operation always yields a value for present input")
}

proptest! {
    #[test]
    fn upper_is_idempotent(s in text_strategy()) {
        let once = apply(Operation::Upper, &s);
        prop_assert_eq!(apply(Operation::Upper, &once), once);
    }

    #[test]
    fn lower_is_idempotent(s in text_strategy()) {
        let once = apply(Operation::Lower, &s);
        prop_assert_eq!(apply(Operation::Lower, &once), once);
    }

    #[test]
    fn slug_is_idempotent(s in text_strategy()) {
        let once = apply(Operation::Slug, &s);
        prop_assert_eq!(apply(Operation::Slug, &once), once.clone());
        prop_assert!(!once.starts_with('-') && !once.ends_with('-'));
        prop_assert!(!once.contains("--"));
    }

    #[test]
    fn remove_special_is_idempotent(s in text_strategy()) {
        let once = apply(Operation::RemoveSpecial, &s);
        prop_assert_eq!(apply(Operation::RemoveSpecial, &once), once);
    }

    #[test]
    fn reverse_is_an_involution(s in any::<String>()) {
        let twice = apply(Operation::Reverse, &apply(Operation::Reverse, &s));
        prop_assert_eq!(twice, s);
    }

    #[test]
    fn unknown_operation_passes_through(s in any::<String>()) {
        prop_assert_eq!(evaluate_with(Some(s.as_str()), Some("unknown_op")), Some(s.clone()));
    }

    #[test]
    fn mask_email_preserves_length(
        local in "[a-z0-9._+-]{1,12}",
        label in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,4}",
    ) {
        let email = format!("{local}@{label}.{tld}");
        let masked = apply(Operation::MaskEmail, &email);
        prop_assert_eq!(masked.chars().count(), email.chars().count());
        let expected_suffix = format!(".{tld}");
        prop_assert!(masked.ends_with(&expected_suffix));
    }

    #[test]
    fn clean_output_has_no_padding(s in text_strategy()) {
        if let Some(cleaned) = evaluate_with(Some(s.as_str()), None) {
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
            prop_assert!(!cleaned.contains("  "));
        } else {
            prop_assert!(s.trim().is_empty());
        }
    }
}
