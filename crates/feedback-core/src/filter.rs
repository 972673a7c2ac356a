// Rust guideline compliant 2026-02-06

//! Rating filters for the feedback list.

use crate::models::{MAX_RATING, MIN_RATING};
use crate::stats::SATISFIED_THRESHOLD;
use crate::{Error, FeedbackRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule restricting which records are displayed.
///
/// Serialized as its textual form: `"all"`, `"1"` through `"5"`, or `"4-5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FilterSelector {
    /// Every record.
    #[default]
    All,
    /// Records with exactly this rating.
    Exact(u8),
    /// Records rated 4 or 5.
    Satisfied,
}

impl FilterSelector {
    /// Returns true if the record passes this filter.
    #[must_use]
    pub fn matches(&self, record: &FeedbackRecord) -> bool {
        match self {
            FilterSelector::All => true,
            FilterSelector::Exact(rating) => record.effective_rating() == *rating,
            FilterSelector::Satisfied => record.effective_rating() >= SATISFIED_THRESHOLD,
        }
    }
}

impl fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSelector::All => write!(f, "all"),
            FilterSelector::Exact(rating) => write!(f, "{}", rating),
            FilterSelector::Satisfied => write!(f, "4-5"),
        }
    }
}

impl FromStr for FilterSelector {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(FilterSelector::All),
            "4-5" | "satisfied" => Ok(FilterSelector::Satisfied),
            other => match other.parse::<u8>() {
                Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => {
                    Ok(FilterSelector::Exact(rating))
                }
                _ => Err(Error::InvalidQuery(format!(
                    "Invalid filter: {} (expected all, 1-5, or 4-5)",
                    value
                ))),
            },
        }
    }
}

impl From<FilterSelector> for String {
    fn from(selector: FilterSelector) -> Self {
        selector.to_string()
    }
}

impl TryFrom<String> for FilterSelector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Keeps the records matching `selector`, preserving input order.
///
/// # Arguments
///
/// * `records` - Records to filter
/// * `selector` - Active filter
///
/// # Returns
///
/// The matching subset in original order.
pub fn filter_records(
    records: Vec<FeedbackRecord>,
    selector: FilterSelector,
) -> Vec<FeedbackRecord> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    if selector == FilterSelector::All {
        return records;
    }

    if records.len() >= PARALLEL_THRESHOLD {
        records
            .into_par_iter()
            .filter(|r| selector.matches(r))
            .collect()
    } else {
        records.into_iter().filter(|r| selector.matches(r)).collect()
    }
}
