// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the feedback CLI.
//!
//! This module provides color support, terminal width detection,
//! and status line helpers.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const FALLBACK_WIDTH: usize = 80;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Wraps text to fit within the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - Indentation for continuation lines (in spaces)
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_text_to(text, indent, get_terminal_width())
}

/// Wraps text to fit within `width` columns.
///
/// Widths are measured in characters. Continuation lines are indented by
/// `indent` spaces; words longer than a line are left intact.
pub fn wrap_text_to(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in line.split_whitespace() {
            let word_width = word.chars().count();
            if current_line.is_empty() {
                current_line.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
                current_width = word_width;
            }
        }
        result.push_str(&current_line);
    }

    result
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{} ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
pub fn print_success(message: &str, use_color: bool) {
    print_status("✓", Color::Green, message, use_color);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("✗", Color::Red, message, use_color);
}
