//! Lease window matching: sites whose lease started within a date range.

use super::result::QueryResult;
use crate::data::{display_date, Column, Dataset, LeaseWindow};
use crate::Result;

/// Columns shown for sites inside the window.
pub const LEASE_WINDOW_COLUMNS: [Column; 7] = [
    Column::PropertyName,
    Column::UnitName,
    Column::TenantName,
    Column::LeaseStartDate,
    Column::LeaseEndDate,
    Column::LeaseYears,
    Column::CurrentRent,
];

/// Select sites whose lease start date lies in `window`, in file order.
///
/// Both lease dates of matched rows are shown as `DD/MM/YYYY`; other values
/// are shown as written. Any record date that fails to parse fails the
/// whole query rather than silently dropping the row. The dataset itself is
/// never modified.
pub fn lease_window_match(dataset: &Dataset, window: &LeaseWindow) -> Result<QueryResult> {
    let mut rows = Vec::new();

    for site in dataset {
        let start = site.lease_start()?;
        let end = site.lease_end()?;
        if !window.contains(start) {
            continue;
        }

        let row: Vec<String> = LEASE_WINDOW_COLUMNS
            .iter()
            .map(|&column| match column {
                Column::LeaseStartDate => display_date(start),
                Column::LeaseEndDate => display_date(end),
                other => site.get(other).to_string(),
            })
            .collect();
        rows.push(row);
    }

    Ok(QueryResult::new(Column::headers(&LEASE_WINDOW_COLUMNS), rows))
}
