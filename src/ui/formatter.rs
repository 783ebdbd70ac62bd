//! Pure formatting functions for UI output.
//!
//! Styling comes from an immutable [`Theme`] passed in by the caller; nothing
//! here holds global color state. `render_*` functions build strings,
//! `display_*` functions print them.

use console::Style;

use crate::boundary::BoundaryWarning;
use crate::platform::{StatusLabels, VersionRecord};

/// Shown in status lines for a field the read pattern did not find.
pub const NOT_FOUND: &str = "not found";

/// Terminal styles for every piece of output.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub prompt: Style,
    pub banner: Style,
    pub version: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header: Style::new().black().on_cyan(),
            label: Style::new().black().on_white(),
            value: Style::new().black().on_cyan(),
            prompt: Style::new().black().on_white(),
            banner: Style::new().yellow().bold(),
            version: Style::new().bold(),
        }
    }
}

impl Theme {
    /// No styling at all
    pub fn plain() -> Self {
        Theme {
            header: Style::new(),
            label: Style::new(),
            value: Style::new(),
            prompt: Style::new(),
            banner: Style::new(),
            version: Style::new(),
        }
    }
}

/// Render the tool banner with the crate version.
pub fn render_banner(theme: &Theme) -> String {
    format!(
        "{} {}",
        theme.banner.apply_to("bump-version"),
        theme.version.apply_to(env!("CARGO_PKG_VERSION"))
    )
}

/// Render the header and the two version lines of a platform status.
///
/// # Arguments
/// * `record` - Values to show; missing ones render as "not found"
/// * `labels` - Platform wording
/// * `finished` - Use the "updated successfully" header instead of "current"
pub fn render_status<R: VersionRecord>(
    record: &R,
    labels: &StatusLabels,
    finished: bool,
    theme: &Theme,
) -> String {
    let header = if finished {
        labels.updated_header
    } else {
        labels.current_header
    };

    let line = |label: &str, value: Option<&str>| {
        format!(
            "{}{}",
            theme.label.apply_to(label),
            theme
                .value
                .apply_to(format!("  {} ", value.unwrap_or(NOT_FOUND)))
        )
    };

    format!(
        "{}\n{}\n{}",
        theme.header.apply_to(header),
        line(labels.marketing, record.marketing_version()),
        line(labels.build, record.build_version())
    )
}

/// Render a prompt question with the current value and a suggestion.
pub fn render_question(
    question: &str,
    current: Option<&str>,
    suggestion: Option<&str>,
    theme: &Theme,
) -> String {
    let mut text = question.to_string();
    match (current, suggestion) {
        (Some(current), Some(suggestion)) => {
            text.push_str(&format!(" (current: {}, suggested: {})", current, suggestion))
        }
        (Some(current), None) => text.push_str(&format!(" (current: {})", current)),
        _ => {}
    }
    text.push(':');
    format!("{} ", theme.prompt.apply_to(text))
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", Style::new().red().apply_to("ERROR:"), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", Style::new().yellow().apply_to("→"), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", Style::new().yellow().apply_to("⚠ WARNING:"), warning);
}
