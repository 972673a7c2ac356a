// Rust guideline compliant 2026-02-09

//! Shared application services for the feedback dashboard.
//!
//! This crate provides reusable, non-CLI-specific helpers for repository
//! discovery, dashboard sessions, argument parsing, presentation labels,
//! and standardized response envelopes.

pub mod dashboard;
pub mod error;
pub mod list;
pub mod present;
pub mod repo;
pub mod response;
pub mod time;

pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::{AppError, ErrorCode, Result};
pub use list::{list_feedback, parse_filter, parse_sort, ListOptions};
pub use present::{distribution_labels, initials, rating_label, sanitize, sanitize_line, stars};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use time::{format_absolute, format_age};
