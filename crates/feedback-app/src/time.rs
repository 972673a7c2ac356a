// Rust guideline compliant 2026-02-09

//! Timestamp formatting for feedback records.
//!
//! Record timestamps are Unix milliseconds.

use chrono::{DateTime, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Formats the age of a record relative to `now_ms`.
///
/// Under an hour reads as minutes, under a day as hours, otherwise days.
/// Timestamps in the future read as `0 minutes ago`.
#[must_use]
pub fn format_age(created_at_ms: i64, now_ms: i64) -> String {
    let elapsed = now_ms.saturating_sub(created_at_ms).max(0);
    if elapsed < HOUR_MS {
        plural(elapsed / MINUTE_MS, "minute")
    } else if elapsed < DAY_MS {
        plural(elapsed / HOUR_MS, "hour")
    } else {
        plural(elapsed / DAY_MS, "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Formats a timestamp as an absolute UTC time.
///
/// Falls back to the raw millisecond value when it is out of range.
#[must_use]
pub fn format_absolute(created_at_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(created_at_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| created_at_ms.to_string())
}
