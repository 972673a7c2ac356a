// Rust guideline compliant 2026-02-06

//! View state machine for the feedback list.
//!
//! The machine holds the active filter, sort key, and page size. It reacts to
//! four intents:
//!
//! - `SetFilter` replaces the filter and resets the page size
//! - `SetSort` replaces the sort key
//! - `LoadMore` grows the page size by one step
//! - `NewRecordAdded` changes nothing; the next view re-reads the collection
//!
//! The machine never holds records. Callers pass the current snapshot to
//! [`ViewState::view`], which filters, sorts, and truncates it.

use crate::filter::{filter_records, FilterSelector};
use crate::sort::{sort_records, SortKey};
use crate::FeedbackRecord;
use serde::Serialize;

/// Records shown per page and added by each `LoadMore`.
pub const DEFAULT_PAGE_STEP: usize = 8;

/// User intents accepted by the view state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Switch to a new filter.
    SetFilter(FilterSelector),
    /// Switch to a new ordering.
    SetSort(SortKey),
    /// Reveal another page of records.
    LoadMore,
    /// A record was appended to the store.
    NewRecordAdded,
}

/// Filter, sort, and page configuration for one dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    filter: FilterSelector,
    sort: SortKey,
    page_size: usize,
    #[serde(skip)]
    page_step: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates the initial state: all records, newest first, one page.
    pub fn new() -> Self {
        Self::with_page_step(DEFAULT_PAGE_STEP)
    }

    /// Creates the initial state with a custom page step.
    ///
    /// A step of zero is raised to one.
    pub fn with_page_step(page_step: usize) -> Self {
        let page_step = page_step.max(1);
        Self {
            filter: FilterSelector::All,
            sort: SortKey::Newest,
            page_size: page_step,
            page_step,
        }
    }

    /// Returns the active filter.
    pub fn filter(&self) -> FilterSelector {
        self.filter
    }

    /// Returns the active sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Returns how many records are currently materialized.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the page step used by `LoadMore` and filter resets.
    pub fn page_step(&self) -> usize {
        self.page_step
    }

    /// Applies an intent to the state.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SetFilter(filter) => {
                self.filter = filter;
                self.page_size = self.page_step;
            }
            Intent::SetSort(sort) => {
                self.sort = sort;
            }
            Intent::LoadMore => {
                self.page_size = self.page_size.saturating_add(self.page_step);
            }
            Intent::NewRecordAdded => {}
        }
        tracing::debug!(
            ?intent,
            filter = %self.filter,
            sort = %self.sort,
            page_size = self.page_size,
            "view intent applied"
        );
    }

    /// Derives the visible page from a snapshot of the collection.
    ///
    /// # Arguments
    ///
    /// * `records` - All records in insertion order
    ///
    /// # Returns
    ///
    /// The filtered, sorted prefix of at most `page_size` records.
    pub fn view(&self, records: Vec<FeedbackRecord>) -> VisiblePage {
        let filtered = filter_records(records, self.filter);
        let mut sorted = sort_records(filtered, self.sort);
        let total = sorted.len();
        sorted.truncate(self.page_size);

        VisiblePage {
            records: sorted,
            total,
            has_more: total > self.page_size,
        }
    }
}

/// The materialized display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisiblePage {
    /// Visible records, a prefix of the filtered and sorted collection.
    pub records: Vec<FeedbackRecord>,
    /// Number of records that passed the filter.
    pub total: usize,
    /// True if `LoadMore` would reveal more records.
    pub has_more: bool,
}

impl VisiblePage {
    /// Returns the number of visible records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are visible.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
