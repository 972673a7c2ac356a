// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk submit` command.

use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::RepoContext;
use feedback_core::NewFeedback;
use std::path::Path;

/// Validates and records a new feedback entry.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The name, rating, or comment fails validation
/// - The data file cannot be written
pub fn execute(
    repo_root: Option<&Path>,
    name: String,
    rating: u8,
    comment: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let repo = RepoContext::discover(repo_root)?;
    let mut dashboard = repo.open_dashboard()?;

    let record = dashboard.submit(NewFeedback::new(name, rating, comment))?;
    Ok(formatter.format_record(&record))
}
