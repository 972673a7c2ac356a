// Rust guideline compliant 2026-02-06

//! Core data models for feedback records.

use serde::{Deserialize, Serialize};

/// Lowest rating a record may carry.
pub const MIN_RATING: u8 = 1;

/// Highest rating a record may carry.
pub const MAX_RATING: u8 = 5;

/// Minimum number of characters in a submitter name.
pub const MIN_NAME_CHARS: usize = 2;

/// Maximum number of characters in a comment.
pub const MAX_COMMENT_CHARS: usize = 500;

/// A single submitted feedback entry.
///
/// Records are immutable once created; stores only ever append them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique hash-based identifier (format: fb-XXXXXXXX).
    pub id: String,
    /// Display name of the submitter.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Optional free-text comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Unix timestamp of creation in milliseconds.
    pub created_at: i64,
}

impl FeedbackRecord {
    /// Builds a record from already-normalized input.
    ///
    /// # Arguments
    ///
    /// * `id` - The assigned record ID
    /// * `input` - Normalized submission (see [`NewFeedback::normalize`])
    /// * `created_at` - Creation instant in Unix milliseconds
    pub fn from_input(id: String, input: NewFeedback, created_at: i64) -> Self {
        Self {
            id,
            name: input.name,
            rating: input.rating,
            comment: input.comment,
            created_at,
        }
    }

    /// Returns the rating clamped into `1..=5`.
    ///
    /// Aggregation reads ratings through this so that a record which slipped
    /// past validation still lands in exactly one bucket.
    #[must_use]
    pub fn effective_rating(&self) -> u8 {
        self.rating.clamp(MIN_RATING, MAX_RATING)
    }

    /// Validates the record data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ID format is invalid
    /// - The name is shorter than two characters
    /// - The rating is outside 1-5
    /// - The comment exceeds 500 characters
    pub fn validate(&self) -> crate::Result<()> {
        crate::identity::validate_id_format(&self.id)?;
        validate_fields(&self.name, self.rating, self.comment.as_deref())
    }
}

/// Input for creating a new feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    /// Display name of the submitter.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Optional comment.
    #[serde(default)]
    pub comment: Option<String>,
}

impl NewFeedback {
    /// Creates a new submission.
    pub fn new(name: impl Into<String>, rating: u8, comment: Option<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment,
        }
    }

    /// Trims and validates the submission.
    ///
    /// Surrounding whitespace is removed from the name and comment, and a
    /// blank comment becomes `None`.
    ///
    /// # Returns
    ///
    /// The normalized submission.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFeedback` if the name is shorter than two
    /// characters, the rating is outside 1-5, or the comment is longer than
    /// 500 characters.
    pub fn normalize(self) -> crate::Result<Self> {
        let name = self.name.trim().to_string();
        let comment = self
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        validate_fields(&name, self.rating, comment.as_deref())?;

        Ok(Self {
            name,
            rating: self.rating,
            comment,
        })
    }
}

fn validate_fields(name: &str, rating: u8, comment: Option<&str>) -> crate::Result<()> {
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(crate::Error::InvalidFeedback(format!(
            "Name must be at least {} characters",
            MIN_NAME_CHARS
        )));
    }

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(crate::Error::InvalidFeedback(format!(
            "Rating must be {}-{}, got {}",
            MIN_RATING, MAX_RATING, rating
        )));
    }

    if let Some(comment) = comment {
        let len = comment.chars().count();
        if len > MAX_COMMENT_CHARS {
            return Err(crate::Error::InvalidFeedback(format!(
                "Comment must be at most {} characters, got {}",
                MAX_COMMENT_CHARS, len
            )));
        }
    }

    Ok(())
}

/// Returns the current Unix time in milliseconds.
///
/// Falls back to zero if the clock reads before the epoch.
pub fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_millis() as i64
}
