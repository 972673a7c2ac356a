// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk dashboard` command.
//!
//! Shows statistics, the rating chart, and the feedback list in one view.

use super::list::parse_options;
use crate::output::ChartKind;
use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::{list_feedback, RepoContext};
use std::path::Path;

/// Renders the full dashboard.
///
/// # Errors
///
/// Returns an error if:
/// - The filter, sort, or page count is invalid
/// - The repository is not initialized or cannot be read
pub fn execute(
    repo_root: Option<&Path>,
    filter: Option<String>,
    sort: Option<String>,
    pages: Option<usize>,
    kind: ChartKind,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let options = parse_options(filter, sort, pages)?;

    let repo = RepoContext::discover(repo_root)?;
    let mut dashboard = repo.open_dashboard()?;
    list_feedback(&mut dashboard, options)?;
    let snapshot = dashboard.snapshot()?;

    Ok(formatter.format_snapshot(&snapshot, kind))
}
