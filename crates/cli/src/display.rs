// SPDX-License-Identifier: MIT

//! Rendering of the summary table and record detail view.
//!
//! The [`Renderer`] is the controller's display adapter: it receives the
//! full cache contents after every mutation and re-renders from scratch.
//! There is no diffing contract; a full re-render is always correct.

use brief_core::SummaryRecord;

use crate::colors::{self, codes};

/// Maximum line width for wrapped body text (excluding indent).
const WRAP_WIDTH: usize = 96;

/// Maximum headline width in the table before truncation.
const HEADLINE_WIDTH: usize = 72;

/// Display adapter consuming the cache's current state.
///
/// Called synchronously after every cache mutation, while the cache
/// borrow is still held; implementations must not call back into the
/// controller.
pub trait Renderer {
    /// Render the full record list.
    fn render(&self, records: &[SummaryRecord]);
}

/// Prints the summary table to stdout.
pub struct TableRenderer {
    colorize: bool,
}

impl TableRenderer {
    pub fn new() -> Self {
        TableRenderer {
            colorize: colors::should_colorize(),
        }
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TableRenderer {
    fn render(&self, records: &[SummaryRecord]) {
        print!("{}", format_table(records, self.colorize));
    }
}

/// Format the record list as an aligned two-column table.
pub fn format_table(records: &[SummaryRecord], colorize: bool) -> String {
    if records.is_empty() {
        return "no summaries yet\n".to_string();
    }

    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut out = String::new();
    let header = format!("{:>id_width$}  {}", "ID", "HEADLINE");
    out.push_str(&colors::paint(&header, codes::CONTEXT, colorize));
    out.push('\n');

    for record in records {
        let headline = truncate(&record.headline, HEADLINE_WIDTH);
        out.push_str(&format!("{:>id_width$}  {}\n", record.id, headline));
    }
    out
}

/// Format a single record for the read-only detail view.
///
/// The body keeps its embedded line breaks; a single long line is
/// wrapped at word boundaries.
pub fn format_record_detail(record: &SummaryRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", record.id, record.headline));

    if record.body.is_empty() {
        return out;
    }

    out.push('\n');
    for line in wrap_text(&record.body, WRAP_WIDTH).lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

/// Truncate to `width` characters, appending an ellipsis when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') {
        return content.to_string();
    }

    // Widths are counted in chars, matching the headline truncation.
    if content.chars().count() <= width {
        return content.to_string();
    }

    let mut result = String::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in content.split_whitespace() {
        let word_width = word.chars().count();
        if current_line.is_empty() {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}


#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
