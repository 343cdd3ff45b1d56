//
//  createsend
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Builds terminal tables with `comfy_table`, plus small formatters for the
//! values that show up in them.
//!
//! ## Example
//!
//! ```rust
//! use createsend::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .color(false)
//!     .headers(["ID", "Name"])
//!     .row(["abc", "Acme"])
//!     .build();
//! assert!(table.to_string().contains("Acme"));
//! ```

use chrono::NaiveDateTime;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

/// Creates an empty table with the standard preset.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for list tables.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row. Headers are cyan when colour is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let color = self.color;
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let cell = Cell::new(h.into());
                if color {
                    cell.fg(Color::Cyan)
                } else {
                    cell
                }
            })
            .collect();
        self.table.set_header(cells);
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colours a campaign or message status by what it means for the sender.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    match status.to_lowercase().as_str() {
        "active" | "accepted" | "delivered" | "sent" => style(status).green().to_string(),
        "opened" | "clicked" => style(status).blue().to_string(),
        "bounced" | "spam" | "suppressed" | "deleted" => style(status).red().to_string(),
        "draft" | "scheduled" | "queued" | "pending" => style(status).yellow().to_string(),
        _ => status.to_string(),
    }
}

/// Formats an optional API timestamp, `-` when absent.
pub fn format_date(value: Option<&NaiveDateTime>) -> String {
    value
        .map(crate::util::format_api_date)
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_bool(value: bool, color: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    match (color, value) {
        (true, true) => style(text).green().to_string(),
        (true, false) => style(text).dim().to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_plain() {
        assert_eq!(format_status("Delivered", false), "Delivered");
    }

    #[test]
    fn test_format_date() {
        let dt = crate::util::parse_api_date("2020-01-02 03:04:05").unwrap();
        assert_eq!(format_date(Some(&dt)), "2020-01-02 03:04");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_bool_plain() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_bool(false, false), "No");
    }

    #[test]
    fn test_table_builder_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["ID", "Name"])
            .rows(vec![vec!["1", "one"], vec!["2", "two"]])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("one"));
        assert!(rendered.contains("two"));
    }
}
