// Rust guideline compliant 2026-02-06

//! Command implementations for the feedback CLI.
//!
//! Every command returns its rendered output so callers decide where it goes.

pub mod chart;
pub mod dashboard;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;
pub mod submit;
