// Rust guideline compliant 2026-02-09

//! Presentation helpers shared by every output surface.

use feedback_core::models::{MAX_RATING, MIN_RATING};

const RATING_LABELS: [&str; 5] = [
    "Very dissatisfied",
    "Dissatisfied",
    "Neutral",
    "Satisfied",
    "Very satisfied",
];

const DISTRIBUTION_LABELS: [&str; 5] = ["1 star", "2 stars", "3 stars", "4 stars", "5 stars"];

/// Returns the descriptive label for a rating.
///
/// Out-of-range ratings are clamped into 1..=5.
#[must_use]
pub fn rating_label(rating: u8) -> &'static str {
    let index = rating.clamp(MIN_RATING, MAX_RATING) - MIN_RATING;
    RATING_LABELS[usize::from(index)]
}

/// Returns the chart labels for the five rating buckets, in rating order.
#[must_use]
pub fn distribution_labels() -> [&'static str; 5] {
    DISTRIBUTION_LABELS
}

/// Renders a rating as filled and empty stars, e.g. `★★★☆☆`.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.clamp(MIN_RATING, MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Builds up to two uppercase initials from a display name.
///
/// Takes the first character of each whitespace-separated word.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Replaces control characters with `U+FFFD` so stored text cannot drive
/// the terminal. Newlines are kept.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && c != '\n' {
                char::REPLACEMENT_CHARACTER
            } else {
                c
            }
        })
        .collect()
}

/// Like [`sanitize`], but also replaces newlines with spaces for
/// single-line output.
#[must_use]
pub fn sanitize_line(text: &str) -> String {
    sanitize(text).replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_labels() {
        assert_eq!(rating_label(1), "Very dissatisfied");
        assert_eq!(rating_label(3), "Neutral");
        assert_eq!(rating_label(5), "Very satisfied");
        assert_eq!(rating_label(0), "Very dissatisfied");
        assert_eq!(rating_label(9), "Very satisfied");
    }

    #[test]
    fn test_distribution_labels_order() {
        let labels = distribution_labels();
        assert_eq!(labels[0], "1 star");
        assert_eq!(labels[4], "5 stars");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }

    #[test]
    fn test_sanitize_replaces_escape_sequences() {
        let cleaned = sanitize("ok\x1b[2J\x1b]0;title\x07\r\nnext");
        assert!(!cleaned.chars().any(|c| c.is_control() && c != '\n'));
        assert_eq!(cleaned, "ok\u{FFFD}[2J\u{FFFD}]0;title\u{FFFD}\u{FFFD}\nnext");
    }

    #[test]
    fn test_sanitize_line_flattens_newlines() {
        assert_eq!(sanitize_line("a\nb\tc"), "a b\u{FFFD}c");
        assert_eq!(sanitize_line("Ótimo atendimento"), "Ótimo atendimento");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ana maria souza"), "AM");
        assert_eq!(initials("  bruno  "), "B");
        assert_eq!(initials("Émile Zola"), "ÉZ");
        assert_eq!(initials(""), "");
    }
}
