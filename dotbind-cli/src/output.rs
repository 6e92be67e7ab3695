use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Whitespace-aligned table output backed by `comfy-table`.
///
/// Columns are sized to the widest entry and separated by two spaces. Tables built with
/// [`TabWriter::fields`] have no header and render as `Label:  value` lines.
pub struct TabWriter {
    table: Table,
    indent: &'static str,
}

impl TabWriter {
    /// Create a table with the given column headers.
    pub fn new(headers: &[&str]) -> Self {
        let mut writer = Self::fields();
        writer.table.set_header(headers.to_vec());
        writer
    }

    /// Create a two-column label/value table without a header.
    pub fn fields() -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);
        Self { table, indent: "" }
    }

    /// Prefix every printed line with `prefix`.
    pub fn indent(mut self, prefix: &'static str) -> Self {
        self.indent = prefix;
        self
    }

    /// Add a row. Values are given in column order.
    pub fn row(&mut self, values: Vec<String>) {
        self.table.add_row(values);
    }

    /// Add a label/value row.
    pub fn field(&mut self, label: &str, value: impl ToString) {
        self.table.add_row(vec![format!("{label}:"), value.to_string()]);
    }

    /// Print the table to stdout.
    pub fn print(&mut self) {
        // The first column carries no left padding and the last no right padding.
        let last = self.table.column_iter().count().saturating_sub(1);
        for (i, column) in self.table.column_iter_mut().enumerate() {
            column.set_padding((u16::from(i != 0), u16::from(i != last)));
        }

        for line in self.table.to_string().lines() {
            println!("{}{}", self.indent, line.trim_end());
        }
    }
}

/// Render a flag as `yes`/`no`.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
