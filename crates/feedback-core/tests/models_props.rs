// Rust guideline compliant 2026-02-06

//! Property-based tests for submission validation.
//!
//! These tests validate universal properties that should hold across all inputs.

use feedback_core::models::{MAX_COMMENT_CHARS, MIN_NAME_CHARS};
use feedback_core::{MemStore, NewFeedback, RecordStore};
use proptest::prelude::*;

/// Generates names with optional surrounding whitespace.
fn arb_name() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex(" {0,3}").unwrap(),
        prop::string::string_regex("[a-zA-Zçãé ]{0,12}").unwrap(),
        prop::string::string_regex(" {0,3}").unwrap(),
    )
        .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
}

/// Generates comments around the length limit.
fn arb_comment() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("   ".to_string())),
        (0usize..=MAX_COMMENT_CHARS + 20).prop_map(|len| Some("é".repeat(len))),
    ]
}

proptest! {
    #[test]
    fn prop_normalize_accepts_exactly_valid_input(
        name in arb_name(),
        rating in 0u8..=7u8,
        comment in arb_comment(),
    ) {
        let trimmed_name = name.trim().chars().count();
        let comment_len = comment
            .as_deref()
            .map(|c| c.trim().chars().count())
            .unwrap_or(0);
        let expected_ok = trimmed_name >= MIN_NAME_CHARS
            && (1..=5).contains(&rating)
            && comment_len <= MAX_COMMENT_CHARS;

        let result = NewFeedback::new(name.clone(), rating, comment).normalize();
        prop_assert_eq!(result.is_ok(), expected_ok);

        if let Ok(normalized) = result {
            prop_assert_eq!(normalized.name.as_str(), name.trim());
            prop_assert!(normalized.comment.as_deref().map_or(true, |c| !c.is_empty()));
        }
    }

    #[test]
    fn prop_rejected_input_leaves_store_unchanged(
        name in arb_name(),
        rating in 0u8..=7u8,
        comment in arb_comment(),
    ) {
        let mut store = MemStore::new();
        let accepted = store.append(NewFeedback::new(name, rating, comment)).is_ok();
        prop_assert_eq!(store.len(), usize::from(accepted));
    }
}
