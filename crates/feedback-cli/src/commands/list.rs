// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk list` command.
//!
//! Lists feedback through the same view state a dashboard session uses:
//! filter, then sort, then reveal `pages` pages.

use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::{list_feedback, parse_filter, parse_sort, ListOptions, RepoContext};
use std::path::Path;

/// Lists feedback records.
///
/// # Arguments
///
/// * `filter` - Filter selector (`all`, `1`-`5`, or `4-5`)
/// * `sort` - Ordering (`newest`, `oldest`, `highest`, `lowest`)
/// * `pages` - Number of pages to reveal
///
/// # Errors
///
/// Returns an error if:
/// - The filter or sort value is invalid
/// - `pages` is zero
/// - The repository is not initialized or cannot be read
pub fn execute(
    repo_root: Option<&Path>,
    filter: Option<String>,
    sort: Option<String>,
    pages: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let options = parse_options(filter, sort, pages)?;

    let repo = RepoContext::discover(repo_root)?;
    let mut dashboard = repo.open_dashboard()?;
    let page = list_feedback(&mut dashboard, options)?;

    Ok(formatter.format_page(&page))
}

/// Parses raw list arguments into options.
///
/// # Errors
///
/// Returns an error if the filter or sort value is invalid.
pub(crate) fn parse_options(
    filter: Option<String>,
    sort: Option<String>,
    pages: Option<usize>,
) -> Result<ListOptions> {
    Ok(ListOptions {
        filter: filter.as_deref().map(parse_filter).transpose()?,
        sort: sort.as_deref().map(parse_sort).transpose()?,
        pages,
    })
}
