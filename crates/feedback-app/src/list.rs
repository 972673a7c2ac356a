// Rust guideline compliant 2026-02-09

//! Listing helpers that turn user arguments into view intents.

use crate::dashboard::Dashboard;
use crate::error::{AppError, Result};
use feedback_core::{FilterSelector, Intent, RecordStore, SortKey, VisiblePage};

/// List options collected from the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Filter override.
    pub filter: Option<FilterSelector>,
    /// Sort override.
    pub sort: Option<SortKey>,
    /// Number of pages to reveal; `None` means one.
    pub pages: Option<usize>,
}

/// Parses a filter argument such as `all`, `3`, or `4-5`.
///
/// # Errors
///
/// Returns an error if the value is not a known selector.
pub fn parse_filter(value: &str) -> Result<FilterSelector> {
    value.trim().parse::<FilterSelector>().map_err(|_| {
        AppError::InvalidInput(format!(
            "Invalid filter: {value}. Use all, 1-5, or 4-5"
        ))
    })
}

/// Parses a sort argument.
///
/// # Errors
///
/// Returns an error if the value is not a known ordering.
pub fn parse_sort(value: &str) -> Result<SortKey> {
    value.trim().parse::<SortKey>().map_err(|_| {
        AppError::InvalidInput(format!(
            "Invalid sort: {value}. Use newest, oldest, highest, or lowest"
        ))
    })
}

/// Applies list options to a dashboard and returns the visible page.
///
/// Each page beyond the first is revealed by one `LoadMore` intent, so the
/// result matches a user pressing "load more" `pages - 1` times. Requests
/// past the last page stop at the last page.
///
/// # Errors
///
/// Returns an error if `pages` is zero or the store cannot be read.
pub fn list_feedback<S: RecordStore>(
    dashboard: &mut Dashboard<S>,
    options: ListOptions,
) -> Result<VisiblePage> {
    let pages = options.pages.unwrap_or(1);
    if pages == 0 {
        return Err(AppError::InvalidInput(
            "pages must be at least 1".to_string(),
        ));
    }

    if let Some(filter) = options.filter {
        dashboard.dispatch(Intent::SetFilter(filter));
    }
    if let Some(sort) = options.sort {
        dashboard.dispatch(Intent::SetSort(sort));
    }
    let total = dashboard.visible_records()?.total;
    let last_page = total.div_ceil(dashboard.state().page_step()).max(1);
    for _ in 1..pages.min(last_page) {
        dashboard.dispatch(Intent::LoadMore);
    }

    dashboard.visible_records()
}
