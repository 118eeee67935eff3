//! Table - the header + rows value and its fixed-width renderer.
//!
//! A [`Table`] is the intermediate value both tabular sources produce: an
//! ordered set of columns and an ordered sequence of rows. Rendering is a
//! pure function of that value — same table, byte-identical output.
//!
//! The layout is fixed: a `+`/`-`/`|` border, one space of padding around
//! cell content, a header band, and one line per row. Column width is the
//! maximum cell width in that column, header included. Lines are joined
//! with `\r\n` and there is no trailing terminator.
//!
//! # Examples
//!
//! ```
//! use rowgrid::table::Table;
//! use rowgrid::value::Value;
//!
//! let table = Table::new(
//!     vec!["ID".into(), "NAME".into()],
//!     vec![vec![Value::Int(1), Value::Text("Banana".into())]],
//! );
//!
//! let ascii = table.render();
//! assert!(ascii.starts_with("+----+--------+"));
//! assert!(ascii.contains("| NAME   |"));
//! assert!(ascii.contains("|  1 |"));
//! ```
//!
//! A table with no columns renders as the minimal two-line border:
//!
//! ```
//! use rowgrid::table::Table;
//!
//! let empty = Table::new(Vec::new(), Vec::new());
//! assert_eq!(empty.render(), "++\r\n++");
//! ```

use log::debug;

use crate::cells;
use crate::r#box::{ASCII, RowLevel};
use crate::value::Value;

/// Horizontal alignment for a column's data cells.
///
/// Headers are always rendered left-aligned regardless of the column's
/// data alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
}

/// Column definition: header text plus declared data alignment.
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text.
    pub header: String,
    /// Alignment applied to this column's data cells.
    pub align: Align,
}

impl Column {
    /// Create a new left-aligned column.
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    /// Set the data alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// The header + rows intermediate value passed from source extraction to
/// rendering.
///
/// A `Table` has no identity beyond its contents; sources create one per
/// conversion and it is discarded after rendering.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from header names and rows, deriving each column's
    /// alignment from its cells.
    ///
    /// A column is right-aligned iff it holds at least one numeric cell and
    /// every cell is numeric or null. Any text or bool cell forces left
    /// alignment; nulls never change an otherwise-numeric column.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(i, header)| Column {
                header,
                align: derived_align(&rows, i),
            })
            .collect();
        Self { columns, rows }
    }

    /// Create a table from explicit column definitions.
    ///
    /// Use this when the caller wants to pin alignment instead of deriving
    /// it from the data.
    #[must_use]
    pub fn from_columns(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column definitions in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Data rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Per-column content width: max of header width and every cell width,
    /// computed independently per column.
    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let mut width = cells::cell_len(&col.header);
                for row in &self.rows {
                    if let Some(value) = row.get(i) {
                        width = width.max(cells::cell_len(&value.to_string()));
                    }
                }
                width
            })
            .collect()
    }

    /// Render the table as a bordered ascii string.
    ///
    /// Deterministic and side-effect-free. Lines are joined with `\r\n`;
    /// a zero-column table renders as `++\r\n++`.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        // Border runs cover the single-space padding on both sides.
        let padded: Vec<usize> = widths.iter().map(|w| w + 2).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(ASCII.build_row(&padded, RowLevel::Top));

        if !self.columns.is_empty() {
            let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
            let header_aligns = vec![Align::Left; self.columns.len()];
            lines.push(render_line(&widths, &headers, &header_aligns));
            lines.push(ASCII.build_row(&padded, RowLevel::HeadRow));

            let aligns: Vec<Align> = self.columns.iter().map(|c| c.align).collect();
            for row in &self.rows {
                let texts: Vec<String> = (0..self.columns.len())
                    .map(|i| row.get(i).map_or_else(String::new, ToString::to_string))
                    .collect();
                lines.push(render_line(&widths, &texts, &aligns));
            }
        }

        lines.push(ASCII.build_row(&padded, RowLevel::Bottom));

        debug!(
            "rendered table: {} columns, {} rows",
            self.columns.len(),
            self.rows.len()
        );
        lines.join("\r\n")
    }
}

/// Derive a column's alignment from its cells.
fn derived_align(rows: &[Vec<Value>], index: usize) -> Align {
    let mut numeric = false;
    for row in rows {
        match row.get(index) {
            Some(value) if value.is_numeric() => numeric = true,
            Some(Value::Null) | None => {}
            Some(_) => return Align::Left,
        }
    }
    if numeric { Align::Right } else { Align::Left }
}

/// Render one content line: `| cell | cell |` with per-column alignment.
fn render_line(widths: &[usize], texts: &[String], aligns: &[Align]) -> String {
    let mut line = String::new();
    line.push(ASCII.cell_left());

    for (i, &width) in widths.iter().enumerate() {
        let text = texts.get(i).map_or("", String::as_str);
        let align = aligns.get(i).copied().unwrap_or_default();
        let fill = width.saturating_sub(cells::cell_len(text));

        line.push(' ');
        match align {
            Align::Left => {
                line.push_str(text);
                line.push_str(&" ".repeat(fill));
            }
            Align::Right => {
                line.push_str(&" ".repeat(fill));
                line.push_str(text);
            }
        }
        line.push(' ');

        if i < widths.len() - 1 {
            line.push(ASCII.cell_divider());
        }
    }

    line.push(ASCII.cell_right());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_table() -> Table {
        Table::new(
            vec!["ID".into(), "PRICE".into(), "COLOR".into(), "NAME".into()],
            vec![vec![
                Value::Int(1),
                Value::Float(1.5),
                Value::Text("yellow".into()),
                Value::Text("Banana".into()),
            ]],
        )
    }

    #[test]
    fn test_render_reference_layout() {
        let expected = "+----+-------+--------+--------+\r\n\
                        | ID | PRICE | COLOR  | NAME   |\r\n\
                        +----+-------+--------+--------+\r\n\
                        |  1 |   1.5 | yellow | Banana |\r\n\
                        +----+-------+--------+--------+";
        assert_eq!(fruit_table().render(), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = fruit_table();
        assert_eq!(table.render(), table.render());
    }

    #[test]
    fn test_zero_column_table() {
        let table = Table::new(Vec::new(), Vec::new());
        assert_eq!(table.render(), "++\r\n++");
    }

    #[test]
    fn test_zero_rows_keeps_header_band() {
        let table = Table::new(vec!["A".into(), "LONGER".into()], Vec::new());
        let expected = "+---+--------+\r\n\
                        | A | LONGER |\r\n\
                        +---+--------+\r\n\
                        +---+--------+";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_numeric_column_right_aligned() {
        let table = Table::new(
            vec!["N".into()],
            vec![vec![Value::Int(7)], vec![Value::Int(1234)]],
        );
        let ascii = table.render();
        assert!(ascii.contains("|    7 |"));
        assert!(ascii.contains("| 1234 |"));
    }

    #[test]
    fn test_null_does_not_break_numeric_alignment() {
        let table = Table::new(
            vec!["N".into()],
            vec![vec![Value::Null], vec![Value::Int(42)]],
        );
        assert_eq!(table.columns()[0].align, Align::Right);
        let ascii = table.render();
        assert!(ascii.contains("|    |"), "null renders as empty cell");
        assert!(ascii.contains("| 42 |"));
    }

    #[test]
    fn test_text_cell_forces_left_alignment() {
        let table = Table::new(
            vec!["MIXED".into()],
            vec![vec![Value::Int(1)], vec![Value::Text("x".into())]],
        );
        assert_eq!(table.columns()[0].align, Align::Left);
        let ascii = table.render();
        assert!(ascii.contains("| 1     |"));
    }

    #[test]
    fn test_all_null_column_left_aligned() {
        let table = Table::new(vec!["V".into()], vec![vec![Value::Null]]);
        assert_eq!(table.columns()[0].align, Align::Left);
    }

    #[test]
    fn test_short_row_padded_with_empty_cells() {
        let table = Table::new(
            vec!["A".into(), "B".into()],
            vec![vec![Value::Text("x".into())]],
        );
        let ascii = table.render();
        assert!(ascii.contains("| x | "));
        assert_eq!(ascii.lines().count(), 5);
    }

    #[test]
    fn test_wide_characters_keep_borders_rectangular() {
        let table = Table::new(
            vec!["NAME".into()],
            vec![vec![Value::Text("日本語".into())]],
        );
        let ascii = table.render();
        let lines: Vec<&str> = ascii.split("\r\n").collect();
        // All border lines are the same byte length; the CJK line occupies
        // the same number of terminal cells.
        assert_eq!(lines[0], "+--------+");
        assert_eq!(lines[3], "| 日本語 |");
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn test_explicit_column_alignment_wins() {
        let table = Table::from_columns(
            vec![Column::new("N").align(Align::Left)],
            vec![vec![Value::Int(5)]],
        );
        let ascii = table.render();
        assert!(ascii.contains("| 5 |"));
    }

    #[test]
    fn test_duplicate_headers_allowed() {
        let table = Table::new(
            vec!["X".into(), "X".into()],
            vec![vec![Value::Int(1), Value::Int(2)]],
        );
        let ascii = table.render();
        assert!(ascii.contains("| X | X |"));
    }
}
