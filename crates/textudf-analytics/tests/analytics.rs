//! Integration tests for the text analytics functions.

use proptest::prelude::*;
use textudf_analytics::{
    CleanKind, Language, Sentiment, analyze, clean_text, keywords_csv, meaningful_word_count,
    similarity,
};

#[test]
fn analyze_product_review() {
    let report = analyze("The battery life is excellent and the screen is excellent too");

    assert_eq!(report.sentiment, Sentiment::Positive);
    assert_eq!(report.language, Language::English);
    assert_eq!(report.keywords[0], "excellent");
    assert_eq!(report.meaningful_words, 6);
    assert_eq!(report.characters, 61);
}

#[test]
fn report_serializes_with_lowercase_tags() {
    let report = analyze("not happy");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["sentiment"], "negative");
    assert_eq!(json["language"], "english");
    assert_eq!(json["keywords"], serde_json::json!(["happy", "not"]));
}

#[test]
fn keywords_match_udf_output() {
    assert_eq!(
        keywords_csv("The quick brown fox jumps over the lazy dog"),
        "quick,brown,jumps,over,lazy"
    );
}

#[test]
fn meaningful_words_ignore_short_tokens() {
    assert_eq!(meaningful_word_count("I am at an ok spot"), 1);
}

#[test]
fn clean_text_passthrough_cases() {
    assert_eq!(clean_text("", Some("html")), "");
    assert_eq!(clean_text("<b>x</b>", None), "<b>x</b>");
    assert_eq!(clean_text("room 7", Some("NUMBERS")), "room ");
}

#[test]
fn clean_kind_names_round_trip() {
    for kind in CleanKind::ALL {
        assert_eq!(kind.to_string().parse::<CleanKind>(), Ok(kind));
    }
}

proptest! {
    #[test]
    fn similarity_is_bounded_and_symmetric(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let ab = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, similarity(&b, &a));
    }

    #[test]
    fn similarity_with_self_is_one(a in "[a-z]{1,10}( [a-z]{1,10}){0,5}") {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn whitespace_clean_is_idempotent(s in "[a-z \t\n]{0,40}") {
        let once = clean_text(&s, Some("whitespace"));
        prop_assert_eq!(clean_text(&once, Some("whitespace")), once);
    }
}
