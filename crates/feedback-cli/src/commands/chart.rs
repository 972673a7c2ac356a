// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk chart` command.

use crate::output::ChartKind;
use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::RepoContext;
use std::path::Path;

/// Renders the rating distribution as a bar or pie chart.
///
/// # Errors
///
/// Returns an error if the repository is not initialized or cannot be read.
pub fn execute(
    repo_root: Option<&Path>,
    kind: ChartKind,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let repo = RepoContext::discover(repo_root)?;
    let distribution = repo.open_dashboard()?.distribution()?;
    Ok(formatter.format_distribution(&distribution, kind))
}
