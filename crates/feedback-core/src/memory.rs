// Rust guideline compliant 2026-02-06

//! In-memory record store.
//!
//! Holds no durable state. Useful as a session-local store and in tests.

use crate::identity::generate_unique_id;
use crate::models::now_millis;
use crate::store::RecordStore;
use crate::{FeedbackRecord, NewFeedback, Result};

/// Record store backed by a `Vec` in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    records: Vec<FeedbackRecord>,
}

impl MemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing records, kept in the given order.
    pub fn from_records(records: Vec<FeedbackRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemStore {
    fn read_all(&self) -> Result<Vec<FeedbackRecord>> {
        Ok(self.records.clone())
    }

    fn append(&mut self, input: NewFeedback) -> Result<FeedbackRecord> {
        let input = input.normalize()?;
        let created_at = now_millis();
        let id = generate_unique_id(
            &input.name,
            input.rating,
            input.comment.as_deref(),
            created_at,
            |candidate| self.records.iter().any(|r| r.id == candidate),
        );
        let record = FeedbackRecord::from_input(id, input, created_at);
        self.records.push(record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<Option<FeedbackRecord>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }
}
