//! Plain-text layout for query results.
//!
//! The data flow is:
//! 1. Dataset (typed sites)
//! 2. QueryResult (display strings + headers)
//! 3. TableLayout (padded lines, ready to print)
//!
//! TableLayout only pads and aligns; it never reorders or reinterprets
//! values. Columns are separated by two spaces and sized to the wider of
//! their widest cell and their header plus two. Numeric columns are aligned
//! on the decimal point and to the right; all others to the left.

use serde::{Deserialize, Serialize};

use crate::query::QueryResult;

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Extra width reserved around each header.
const HEADER_PADDING: usize = 2;

/// A laid-out table: header line, dash separator, one line per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub header: String,
    pub separator: String,
    pub rows: Vec<String>,
}

impl TableLayout {
    /// Lay out a query result.
    pub fn from_result(result: &QueryResult) -> Self {
        let columns: Vec<ColumnLayout> = (0..result.headers.len())
            .map(|i| {
                let cells = result.rows.iter().map(move |r| cell(r, i));
                ColumnLayout::new(&result.headers[i], cells)
            })
            .collect();

        let header = join_line(
            columns
                .iter()
                .zip(&result.headers)
                .map(|(col, h)| col.pad(h)),
        );
        let separator = join_line(columns.iter().map(|col| "-".repeat(col.width)));
        let rows = result
            .rows
            .iter()
            .map(|row| {
                join_line(
                    columns
                        .iter()
                        .enumerate()
                        .map(|(i, col)| col.pad(&col.align_decimal(cell(row, i)))),
                )
            })
            .collect();

        TableLayout {
            header,
            separator,
            rows,
        }
    }

    /// All lines in print order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [self.header.as_str(), self.separator.as_str()]
            .into_iter()
            .chain(self.rows.iter().map(String::as_str))
    }

    /// The whole table as text, one line per row, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

fn join_line(cells: impl Iterator<Item = String>) -> String {
    let line = cells.collect::<Vec<_>>().join(COLUMN_GAP);
    line.trim_end().to_string()
}

fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn is_number(s: &str) -> bool {
    s.trim().parse::<f64>().map_or(false, f64::is_finite)
}

/// Digits after the decimal point, or `None` for values without one.
fn decimals(s: &str) -> Option<usize> {
    s.trim().find('.').map(|pos| s.trim().len() - pos - 1)
}

/// Sizing and alignment for one column.
struct ColumnLayout {
    width: usize,
    numeric: bool,
    max_decimals: Option<usize>,
}

impl ColumnLayout {
    fn new<'a>(header: &str, cells: impl Iterator<Item = &'a str> + Clone) -> Self {
        let mut filled = cells.clone().filter(|c| !c.is_empty()).peekable();
        let numeric = filled.peek().is_some() && filled.all(is_number);
        let max_decimals = if numeric {
            cells.clone().filter_map(decimals).max()
        } else {
            None
        };

        let mut layout = ColumnLayout {
            width: 0,
            numeric,
            max_decimals,
        };
        let widest_cell = cells
            .map(|c| text_width(&layout.align_decimal(c)))
            .max()
            .unwrap_or(0);
        layout.width = widest_cell.max(text_width(header) + HEADER_PADDING);
        layout
    }

    /// Pad a numeric cell on the right so decimal points line up.
    fn align_decimal(&self, value: &str) -> String {
        let Some(max) = self.max_decimals else {
            return value.to_string();
        };
        if value.is_empty() {
            return String::new();
        }
        let pad = match decimals(value) {
            Some(d) => max.saturating_sub(d),
            None => max + 1,
        };
        format!("{}{}", value, " ".repeat(pad))
    }

    fn pad(&self, value: &str) -> String {
        if self.numeric {
            format!("{:>width$}", value, width = self.width)
        } else {
            format!("{:<width$}", value, width = self.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(headers: &[&str], rows: &[&[&str]]) -> QueryResult {
        QueryResult::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_simple_layout() {
        let table = TableLayout::from_result(&result(
            &["Property Name", "Unit Name", "Tenant Name", "Current Rent"],
            &[&["Farmhouse 1", "Unit 1", "CellWorks Ltd", "500"]],
        ));

        assert_eq!(
            table.render(),
            "Property Name    Unit Name    Tenant Name      Current Rent\n\
             ---------------  -----------  -------------  --------------\n\
             Farmhouse 1      Unit 1       CellWorks Ltd             500\n"
        );
    }

    #[test]
    fn test_decimal_alignment() {
        let table = TableLayout::from_result(&result(
            &["Rent"],
            &[&["500"], &["999.99"], &["12.5"]],
        ));

        assert_eq!(table.header, "  Rent");
        // Points line up; trailing padding is stripped from each line
        assert_eq!(table.rows, vec!["500", "999.99", " 12.5"]);
    }

    #[test]
    fn test_text_columns_left_aligned() {
        let table = TableLayout::from_result(&result(
            &["Tenant Name", "Number of Masts"],
            &[&["Arqiva Ltd", "2"], &["Vodafone Ltd", "11"]],
        ));

        assert_eq!(table.header, "Tenant Name      Number of Masts");
        assert_eq!(table.separator, "-------------  -----------------");
        assert_eq!(table.rows[0], "Arqiva Ltd                     2");
        assert_eq!(table.rows[1], "Vodafone Ltd                  11");
    }

    #[test]
    fn test_dates_are_text() {
        let table = TableLayout::from_result(&result(
            &["Lease Start Date"],
            &[&["29/04/2008"]],
        ));
        assert_eq!(table.header, "Lease Start Date");
        assert_eq!(table.rows[0], "29/04/2008");
    }

    #[test]
    fn test_non_finite_words_are_text() {
        let table = TableLayout::from_result(&result(
            &["Tenant Name"],
            &[&["inf"], &["NaN"], &["Infinity"]],
        ));
        assert_eq!(table.rows, vec!["inf", "NaN", "Infinity"]);
        assert_eq!(table.header, "Tenant Name");
    }

    #[test]
    fn test_empty_result_keeps_headers() {
        let table = TableLayout::from_result(&result(&["Total Rent"], &[]));
        assert_eq!(table.render(), "Total Rent\n------------\n");
    }

    #[test]
    fn test_lines_order() {
        let table = TableLayout::from_result(&result(&["A"], &[&["x"], &["y"]]));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec!["A", "---", "x", "y"]);
    }
}
