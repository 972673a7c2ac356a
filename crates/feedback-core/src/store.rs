// Rust guideline compliant 2026-02-06

//! The record store seam.

use crate::{FeedbackRecord, NewFeedback, Result};

/// An append-only collection of feedback records.
///
/// Implemented by the JSONL [`Storage`](crate::Storage) and the in-memory
/// [`MemStore`](crate::MemStore).
pub trait RecordStore {
    /// Reads every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn read_all(&self) -> Result<Vec<FeedbackRecord>>;

    /// Validates the input, assigns an ID and timestamp, and appends it.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails validation or cannot be persisted.
    fn append(&mut self, input: NewFeedback) -> Result<FeedbackRecord>;

    /// Looks up a record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn get(&self, id: &str) -> Result<Option<FeedbackRecord>>;
}
