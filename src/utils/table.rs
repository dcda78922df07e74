//! Table rendering utilities for CLI outputs.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    /// Column sized to fit its header and every value it will show.
    pub fn fitted(header: &str, values: impl Iterator<Item = usize>) -> Self {
        let width = values.chain(std::iter::once(header.width())).max().unwrap_or(0);
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&pad(&row[i], col.width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

/// Pad on display width, not byte length, so colored cells and wide glyphs
/// line up.
fn pad(s: &str, width: usize) -> String {
    let visible = strip_ansi(s).width();
    let fill = width.saturating_sub(visible);
    format!("{}{}", s, " ".repeat(fill))
}
