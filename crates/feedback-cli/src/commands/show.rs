// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk show` command.

use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::{AppError, RepoContext};
use feedback_core::identity;
use std::path::Path;

/// Shows a single feedback record by ID.
///
/// # Errors
///
/// Returns an error if:
/// - The ID is not in `fb-xxxxxxxx` form
/// - The repository is not initialized
/// - No record has the ID
pub fn execute(
    repo_root: Option<&Path>,
    id: String,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let id = id.trim().to_lowercase();
    identity::validate_id_format(&id)
        .map_err(|_| AppError::InvalidInput(format!("Invalid ID format: {id}")))?;

    let repo = RepoContext::discover(repo_root)?;
    let dashboard = repo.open_dashboard()?;
    let record = dashboard.find(&id)?;

    Ok(formatter.format_record(&record))
}
