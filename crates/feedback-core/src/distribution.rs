// Rust guideline compliant 2026-02-06

//! Rating histogram over a feedback collection.

use crate::models::{MAX_RATING, MIN_RATING};
use crate::FeedbackRecord;
use serde::Serialize;

/// Number of rating buckets.
pub const BUCKETS: usize = MAX_RATING as usize;

/// Count of records per rating value, index 0 holding rating 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Distribution([usize; BUCKETS]);

impl Distribution {
    /// Returns the raw bucket counts ordered by rating 1..=5.
    #[must_use]
    pub fn counts(&self) -> [usize; BUCKETS] {
        self.0
    }

    /// Returns the count for one rating, or 0 for a rating outside 1-5.
    #[must_use]
    pub fn count_for(&self, rating: u8) -> usize {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            self.0[usize::from(rating - MIN_RATING)]
        } else {
            0
        }
    }

    /// Returns the sum of all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterates `(rating, count)` pairs in rating order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (MIN_RATING..=MAX_RATING).zip(self.0.iter().copied())
    }

    /// Returns each bucket as a percentage of the total.
    ///
    /// All shares are zero for an empty distribution.
    #[must_use]
    pub fn shares(&self) -> [f64; BUCKETS] {
        let total = self.total();
        let mut shares = [0.0; BUCKETS];
        if total == 0 {
            return shares;
        }
        for (share, count) in shares.iter_mut().zip(self.0.iter()) {
            *share = *count as f64 * 100.0 / total as f64;
        }
        shares
    }
}

/// Computes the rating histogram for a collection.
///
/// Always yields exactly five buckets. Out-of-range ratings are clamped
/// into the nearest bucket.
pub fn compute_distribution(records: &[FeedbackRecord]) -> Distribution {
    let mut buckets = [0usize; BUCKETS];
    for record in records {
        buckets[usize::from(record.effective_rating() - MIN_RATING)] += 1;
    }
    Distribution(buckets)
}
