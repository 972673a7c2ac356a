// Rust guideline compliant 2026-02-06

//! Orderings for the feedback list.

use crate::{Error, FeedbackRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule ordering displayed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Highest rating first.
    Highest,
    /// Lowest rating first.
    Lowest,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Highest => "highest",
            SortKey::Lowest => "lowest",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "highest" => Ok(SortKey::Highest),
            "lowest" => Ok(SortKey::Lowest),
            _ => Err(Error::InvalidQuery(format!(
                "Invalid sort: {} (expected newest, oldest, highest, or lowest)",
                value
            ))),
        }
    }
}

/// Orders records by `key`.
///
/// The sort is stable: records with equal timestamps or equal ratings keep
/// their relative input order.
pub fn sort_records(mut records: Vec<FeedbackRecord>, key: SortKey) -> Vec<FeedbackRecord> {
    match key {
        SortKey::Newest => records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Highest => {
            records.sort_by(|a, b| b.effective_rating().cmp(&a.effective_rating()))
        }
        SortKey::Lowest => records.sort_by(|a, b| a.effective_rating().cmp(&b.effective_rating())),
    }
    records
}
