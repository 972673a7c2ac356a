// Rust guideline compliant 2026-02-06

//! Implementation of the `fbk init` command.
//!
//! Initializes a feedback repository by creating the `.feedback` directory,
//! the JSONL data file, and a default configuration.

use crate::OutputFormatter;
use anyhow::Result;
use feedback_app::RepoContext;
use serde_json::json;
use std::path::Path;

/// Initializes a feedback repository.
///
/// Running it again on an initialized repository leaves existing data intact.
///
/// # Errors
///
/// Returns an error if:
/// - The `.feedback` directory cannot be created
/// - The data file cannot be created
/// - The configuration file cannot be written
pub fn execute(repo_root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<String> {
    let repo = RepoContext::init(repo_root)?;

    let message = format!(
        "Feedback repository initialized at {}\n  - {}\n  - {}",
        repo.feedback_dir().display(),
        repo.data_path().display(),
        repo.config_path().display()
    );
    Ok(formatter.format_notice(
        &message,
        json!({
            "path": repo.feedback_dir(),
            "data": repo.data_path(),
            "config": repo.config_path(),
        }),
    ))
}
