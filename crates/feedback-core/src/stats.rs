// Rust guideline compliant 2026-02-06

//! Summary statistics over a feedback collection.

use crate::FeedbackRecord;
use serde::Serialize;

/// Ratings at or above this count as satisfied.
pub const SATISFIED_THRESHOLD: u8 = 4;

/// The single rating that counts as neutral.
pub const NEUTRAL_RATING: u8 = 3;

/// Aggregate statistics for a set of feedback records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of records.
    pub count: usize,
    /// Mean rating at full precision; 0.0 for an empty collection.
    pub average_rating: f64,
    /// Records rated 4 or 5.
    pub satisfied_count: usize,
    /// Records rated 3.
    pub neutral_count: usize,
    /// Records rated 1 or 2.
    pub unsatisfied_count: usize,
}

impl Statistics {
    /// Returns the mean rounded to one decimal place, half away from zero.
    #[must_use]
    pub fn rounded_average(&self) -> f64 {
        (self.average_rating * 10.0).round() / 10.0
    }

    /// Returns the mean formatted for display, e.g. `"4.3"` or `"0.0"`.
    #[must_use]
    pub fn display_average(&self) -> String {
        format!("{:.1}", self.rounded_average())
    }
}

/// Computes summary statistics for a collection.
///
/// Ratings are read through [`FeedbackRecord::effective_rating`], so the
/// three tier counts always add up to `count`.
pub fn compute_statistics(records: &[FeedbackRecord]) -> Statistics {
    let mut sum: u64 = 0;
    let mut satisfied_count = 0;
    let mut neutral_count = 0;
    let mut unsatisfied_count = 0;

    for record in records {
        let rating = record.effective_rating();
        sum += u64::from(rating);
        match rating {
            r if r >= SATISFIED_THRESHOLD => satisfied_count += 1,
            NEUTRAL_RATING => neutral_count += 1,
            _ => unsatisfied_count += 1,
        }
    }

    let count = records.len();
    let average_rating = if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    };

    Statistics {
        count,
        average_rating,
        satisfied_count,
        neutral_count,
        unsatisfied_count,
    }
}
