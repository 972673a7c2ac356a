// Rust guideline compliant 2026-02-09

//! Dashboard session over a record store.
//!
//! A [`Dashboard`] owns the store and the view state for one session. Every
//! query re-reads the full store, so derived data never goes stale.

use crate::error::{AppError, Result};
use feedback_core::{
    compute_distribution, compute_statistics, Config, Distribution, FeedbackRecord,
    FilterSelector, Intent, NewFeedback, RecordStore, SortKey, Statistics, ViewState,
    VisiblePage,
};
use serde::Serialize;

/// Everything a presentation layer needs, derived from one store read.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Summary statistics over all records.
    pub statistics: Statistics,
    /// Rating histogram over all records.
    pub distribution: Distribution,
    /// Active filter.
    pub filter: FilterSelector,
    /// Active ordering.
    pub sort: SortKey,
    /// Visible page of the list.
    pub page: VisiblePage,
}

/// One dashboard session.
pub struct Dashboard<S> {
    store: S,
    state: ViewState,
}

impl<S: RecordStore> Dashboard<S> {
    /// Creates a session with the default view state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: ViewState::new(),
        }
    }

    /// Creates a session using the configured page size.
    pub fn with_config(store: S, config: &Config) -> Self {
        Self {
            store,
            state: ViewState::with_page_step(config.page_size),
        }
    }

    /// Returns the current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies a user intent to the view state.
    pub fn dispatch(&mut self, intent: Intent) {
        self.state.apply(intent);
    }

    /// Computes summary statistics over all records.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn statistics(&self) -> Result<Statistics> {
        Ok(compute_statistics(&self.store.read_all()?))
    }

    /// Computes the rating histogram over all records.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn distribution(&self) -> Result<Distribution> {
        Ok(compute_distribution(&self.store.read_all()?))
    }

    /// Returns the visible page under the current view state.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn visible_records(&self) -> Result<VisiblePage> {
        Ok(self.state.view(self.store.read_all()?))
    }

    /// Derives statistics, distribution, and the visible page together.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        let records = self.store.read_all()?;
        Ok(DashboardSnapshot {
            statistics: compute_statistics(&records),
            distribution: compute_distribution(&records),
            filter: self.state.filter(),
            sort: self.state.sort(),
            page: self.state.view(records),
        })
    }

    /// Validates and stores a submission, then signals the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails validation or cannot be stored.
    pub fn submit(&mut self, input: NewFeedback) -> Result<FeedbackRecord> {
        let record = self.store.append(input)?;
        self.dispatch(Intent::NewRecordAdded);
        tracing::debug!(id = %record.id, "view notified of new record");
        Ok(record)
    }

    /// Looks up a single record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no record has the ID.
    pub fn find(&self, id: &str) -> Result<FeedbackRecord> {
        self.store
            .get(id)?
            .ok_or_else(|| AppError::Core(feedback_core::Error::NotFound(id.to_string())))
    }
}
