// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk stats` command.

use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::RepoContext;
use std::path::Path;

/// Shows summary statistics over every stored record.
///
/// # Errors
///
/// Returns an error if the repository is not initialized or cannot be read.
pub fn execute(repo_root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<String> {
    let repo = RepoContext::discover(repo_root)?;
    let statistics = repo.open_dashboard()?.statistics()?;
    Ok(formatter.format_statistics(&statistics))
}
