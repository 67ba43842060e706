//! Query output: display-ready rows plus their headers.

use serde::{Deserialize, Serialize};

/// Rows produced by a query, aligned positionally with `headers`.
///
/// Every value is already a display string; presenters lay them out but
/// never reinterpret them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Column headers
    pub headers: Vec<String>,
    /// Output rows, each as long as `headers`
    pub rows: Vec<Vec<String>>,
}

impl QueryResult {
    /// Create a result from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of output rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The output of one query run, titled for display.
///
/// Most queries produce a single table; lease-years matching adds a second
/// one-cell table for the rent total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Description of what the tables show
    pub title: String,
    /// Tables, in display order
    pub tables: Vec<QueryResult>,
}

impl ReportSection {
    /// Create a section with a single table.
    pub fn single(title: impl Into<String>, table: QueryResult) -> Self {
        Self {
            title: title.into(),
            tables: vec![table],
        }
    }
}
