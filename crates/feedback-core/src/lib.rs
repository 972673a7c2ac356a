// Rust guideline compliant 2026-02-06

//! Feedback Core Library
//!
//! This crate provides the foundational components for the feedback dashboard:
//! - Data models and the creation-boundary validation
//! - Aggregation engines (statistics, rating distribution)
//! - List engines (filter, sort) and the view state machine
//! - Record stores (JSONL file, in-memory)
//! - Hash ID generation
//! - Configuration and error types

pub mod config;
pub mod distribution;
pub mod error;
pub mod filter;
pub mod identity;
pub mod memory;
pub mod models;
pub mod sort;
pub mod stats;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{Config, OutputFormat};
pub use distribution::{compute_distribution, Distribution};
pub use error::{Error, Result};
pub use filter::{filter_records, FilterSelector};
pub use memory::MemStore;
pub use models::{FeedbackRecord, NewFeedback};
pub use sort::{sort_records, SortKey};
pub use stats::{compute_statistics, Statistics};
pub use storage::Storage;
pub use store::RecordStore;
pub use view::{Intent, ViewState, VisiblePage};
