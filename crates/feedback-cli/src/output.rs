// Rust guideline compliant 2026-02-06

//! Output formatting module for the feedback CLI.
//!
//! This module provides functionality for formatting feedback data
//! in various output formats (JSON, table, plain text).

use crate::terminal::{get_terminal_width, wrap_text};
use feedback_app::{
    distribution_labels, format_absolute, format_age, initials, rating_label, sanitize,
    sanitize_line, stars, DashboardSnapshot, SuccessEnvelope,
};
use feedback_core::models::now_millis;
use feedback_core::{Distribution, FeedbackRecord, OutputFormat, Statistics, VisiblePage};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

const PIE_CELLS: usize = 40;
const DETAIL_INDENT: usize = 13;

/// Chart style for the rating distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// One horizontal bar per rating.
    #[default]
    Bar,
    /// Share of each rating in a single strip.
    Pie,
}

/// Output formatter trait.
///
/// Defines the interface for formatting feedback data in different output formats.
pub trait OutputFormatter {
    /// Formats a single record for display.
    fn format_record(&self, record: &FeedbackRecord) -> String;

    /// Formats the visible page of the feedback list.
    fn format_page(&self, page: &VisiblePage) -> String;

    /// Formats summary statistics.
    fn format_statistics(&self, statistics: &Statistics) -> String;

    /// Formats the rating distribution as a chart.
    fn format_distribution(&self, distribution: &Distribution, kind: ChartKind) -> String;

    /// Formats a full dashboard view.
    fn format_snapshot(&self, snapshot: &DashboardSnapshot, kind: ChartKind) -> String;

    /// Formats a short notice with a machine-readable payload.
    fn format_notice(&self, message: &str, payload: serde_json::Value) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Wraps every payload in the standard success envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(payload: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(payload))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

fn statistics_json(statistics: &Statistics) -> serde_json::Value {
    json!({
        "count": statistics.count,
        "average_rating": statistics.rounded_average(),
        "average_display": statistics.display_average(),
        "satisfied_count": statistics.satisfied_count,
        "neutral_count": statistics.neutral_count,
        "unsatisfied_count": statistics.unsatisfied_count,
    })
}

fn distribution_json(distribution: &Distribution, kind: ChartKind) -> serde_json::Value {
    let labels = distribution_labels();
    let shares = distribution.shares();
    let buckets: Vec<serde_json::Value> = distribution
        .iter()
        .enumerate()
        .map(|(index, (rating, count))| {
            json!({
                "rating": rating,
                "label": labels[index],
                "count": count,
                "share": (shares[index] * 10.0).round() / 10.0,
            })
        })
        .collect();
    json!({ "kind": kind, "total": distribution.total(), "buckets": buckets })
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &FeedbackRecord) -> String {
        Self::envelope(record)
    }

    fn format_page(&self, page: &VisiblePage) -> String {
        Self::envelope(page)
    }

    fn format_statistics(&self, statistics: &Statistics) -> String {
        Self::envelope(statistics_json(statistics))
    }

    fn format_distribution(&self, distribution: &Distribution, kind: ChartKind) -> String {
        Self::envelope(distribution_json(distribution, kind))
    }

    fn format_snapshot(&self, snapshot: &DashboardSnapshot, kind: ChartKind) -> String {
        Self::envelope(json!({
            "statistics": statistics_json(&snapshot.statistics),
            "distribution": distribution_json(&snapshot.distribution, kind),
            "filter": snapshot.filter,
            "sort": snapshot.sort,
            "page": snapshot.page,
        }))
    }

    fn format_notice(&self, _message: &str, payload: serde_json::Value) -> String {
        Self::envelope(payload)
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Renders record timestamps either relative to a fixed instant or as UTC.
#[derive(Debug, Clone, Copy)]
struct Clock {
    absolute: bool,
    now_ms: i64,
}

impl Clock {
    fn render(&self, created_at: i64) -> String {
        if self.absolute {
            format_absolute(created_at)
        } else {
            format_age(created_at, self.now_ms)
        }
    }
}

fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

fn rating_color(rating: u8) -> Color {
    match rating {
        4..=5 => Color::Green,
        3 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Table output formatter.
///
/// Formats feedback as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
    clock: Clock,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `absolute_time` - Whether to show UTC times instead of ages
    pub fn new(use_color: bool, absolute_time: bool) -> Self {
        Self {
            use_color,
            clock: Clock {
                absolute: absolute_time,
                now_ms: now_millis(),
            },
        }
    }

    /// Measures relative ages against `now_ms` instead of the wall clock.
    #[must_use]
    pub fn at(mut self, now_ms: i64) -> Self {
        self.clock.now_ms = now_ms;
        self
    }

    fn colored(&self, text: &str, color: Color) -> String {
        if self.use_color {
            paint(text, color, false)
        } else {
            text.to_string()
        }
    }

    fn bar_chart(&self, distribution: &Distribution) -> String {
        let labels = distribution_labels();
        let max_count = distribution.counts().into_iter().max().unwrap_or(0);
        let max_bar = get_terminal_width().saturating_sub(30).clamp(10, 40);

        let mut output = String::new();
        for (index, (rating, count)) in distribution.iter().enumerate() {
            let width = if max_count == 0 {
                0
            } else {
                (count * max_bar + max_count - 1) / max_count
            };
            let bar = self.colored(&"█".repeat(width), rating_color(rating));
            output.push_str(&format!("{:<8} {} {}\n", labels[index], bar, count));
        }
        output
    }

    fn pie_chart(&self, distribution: &Distribution) -> String {
        let labels = distribution_labels();
        let shares = distribution.shares();

        let mut strip = String::new();
        for (rating, _) in distribution.iter() {
            let share = shares[usize::from(rating - 1)];
            let cells = (share * PIE_CELLS as f64 / 100.0).round() as usize;
            let segment = rating.to_string().repeat(cells);
            strip.push_str(&self.colored(&segment, rating_color(rating)));
        }

        let mut output = format!("[{}]\n", strip);
        for (index, (_, count)) in distribution.iter().enumerate() {
            output.push_str(&format!(
                "{:<8} {:>5.1}%  ({})\n",
                labels[index], shares[index], count
            ));
        }
        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_record(&self, record: &FeedbackRecord) -> String {
        let mut output = String::new();

        let name = sanitize_line(&record.name);
        output.push_str(&format!("ID:          {}\n", record.id));
        output.push_str(&format!("Name:        {} ({})\n", name, initials(&name)));
        let rating = record.effective_rating();
        output.push_str(&format!(
            "Rating:      {} {}\n",
            self.colored(&stars(rating), rating_color(rating)),
            rating_label(rating)
        ));
        output.push_str(&format!(
            "Submitted:   {}\n",
            self.clock.render(record.created_at)
        ));

        if let Some(comment) = &record.comment {
            output.push_str(&format!(
                "Comment:     {}\n",
                wrap_text(&sanitize(comment), DETAIL_INDENT)
            ));
        }

        output
    }

    fn format_page(&self, page: &VisiblePage) -> String {
        if page.is_empty() {
            return "No feedback found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "ID".to_string(),
            "Name".to_string(),
            "Rating".to_string(),
            "Comment".to_string(),
            "Submitted".to_string(),
        ]);

        for record in &page.records {
            let name = sanitize_line(&record.name);
            builder.push_record(vec![
                record.id.clone(),
                format!("{} {}", initials(&name), name),
                stars(record.effective_rating()),
                record.comment.as_deref().map(sanitize).unwrap_or_default(),
                self.clock.render(record.created_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        let mut output = table.to_string();
        output.push_str(&format!("\nShowing {} of {}", page.len(), page.total));
        if page.has_more {
            output.push_str(" (more available with --pages)");
        }
        output
    }

    fn format_statistics(&self, statistics: &Statistics) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Metric".to_string(), "Value".to_string()]);
        builder.push_record(vec![
            "Total feedback".to_string(),
            statistics.count.to_string(),
        ]);
        builder.push_record(vec![
            "Average rating".to_string(),
            statistics.display_average(),
        ]);
        builder.push_record(vec![
            "Satisfied (4-5)".to_string(),
            statistics.satisfied_count.to_string(),
        ]);
        builder.push_record(vec![
            "Neutral (3)".to_string(),
            statistics.neutral_count.to_string(),
        ]);
        builder.push_record(vec![
            "Unsatisfied (1-2)".to_string(),
            statistics.unsatisfied_count.to_string(),
        ]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_distribution(&self, distribution: &Distribution, kind: ChartKind) -> String {
        match kind {
            ChartKind::Bar => self.bar_chart(distribution),
            ChartKind::Pie => self.pie_chart(distribution),
        }
    }

    fn format_snapshot(&self, snapshot: &DashboardSnapshot, kind: ChartKind) -> String {
        let mut output = String::new();
        output.push_str(&self.format_statistics(&snapshot.statistics));
        output.push_str("\n\nRating distribution\n");
        output.push_str(&self.format_distribution(&snapshot.distribution, kind));
        output.push_str(&format!(
            "\nFeedback (filter: {}, sort: {})\n",
            snapshot.filter, snapshot.sort
        ));
        output.push_str(&self.format_page(&snapshot.page));
        output
    }

    fn format_notice(&self, message: &str, _payload: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            format!("{}{}", paint("Error: ", Color::Red, true), error)
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats feedback as simple plain text without colors or tables.
pub struct PlainFormatter {
    clock: Clock,
}

impl PlainFormatter {
    /// Creates a new plain formatter.
    pub fn new(absolute_time: bool) -> Self {
        Self {
            clock: Clock {
                absolute: absolute_time,
                now_ms: now_millis(),
            },
        }
    }

    /// Measures relative ages against `now_ms` instead of the wall clock.
    #[must_use]
    pub fn at(mut self, now_ms: i64) -> Self {
        self.clock.now_ms = now_ms;
        self
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_record(&self, record: &FeedbackRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", record.id));
        output.push_str(&format!("{}\n", sanitize_line(&record.name)));
        output.push_str(&format!("{}\n", record.effective_rating()));
        output.push_str(&format!("{}\n", self.clock.render(record.created_at)));

        if let Some(comment) = &record.comment {
            output.push_str(&format!("{}\n", sanitize(comment)));
        }

        output
    }

    fn format_page(&self, page: &VisiblePage) -> String {
        if page.is_empty() {
            return "No feedback found.".to_string();
        }

        let mut output = String::new();
        for record in &page.records {
            output.push_str(&format!(
                "{} {} {} {}\n",
                record.id,
                record.effective_rating(),
                sanitize_line(&record.name),
                record.comment.as_deref().map_or("-".to_string(), sanitize_line)
            ));
        }
        output.push_str(&format!("{} of {}\n", page.len(), page.total));
        output
    }

    fn format_statistics(&self, statistics: &Statistics) -> String {
        format!(
            "count={} average={} satisfied={} neutral={} unsatisfied={}\n",
            statistics.count,
            statistics.display_average(),
            statistics.satisfied_count,
            statistics.neutral_count,
            statistics.unsatisfied_count
        )
    }

    fn format_distribution(&self, distribution: &Distribution, _kind: ChartKind) -> String {
        let shares = distribution.shares();
        let mut output = String::new();
        for (index, (rating, count)) in distribution.iter().enumerate() {
            output.push_str(&format!("{} {} {:.1}\n", rating, count, shares[index]));
        }
        output
    }

    fn format_snapshot(&self, snapshot: &DashboardSnapshot, kind: ChartKind) -> String {
        let mut output = self.format_statistics(&snapshot.statistics);
        output.push_str(&self.format_distribution(&snapshot.distribution, kind));
        output.push_str(&self.format_page(&snapshot.page));
        output
    }

    fn format_notice(&self, message: &str, _payload: serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
/// * `absolute_time` - Whether to show UTC times instead of relative ages
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(
    format: OutputFormat,
    use_color: bool,
    absolute_time: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color, absolute_time)),
        OutputFormat::Plain => Box::new(PlainFormatter::new(absolute_time)),
    }
}
