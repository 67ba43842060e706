//! Lease-years matching: sites with an exact lease length, plus their total rent.

use rust_decimal::Decimal;

use super::result::QueryResult;
use crate::data::Dataset;
use crate::error::MastError;
use crate::Result;

/// Header of the total rent table.
pub const TOTAL_RENT_HEADER: &str = "Total Rent";

/// Sites whose lease runs for a given number of years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseYearsMatch {
    /// Matched rows, unprojected, under the dataset's own headers
    pub matched: QueryResult,
    /// Sum of current rent across matched rows; zero when nothing matched
    pub total_rent: Decimal,
}

impl LeaseYearsMatch {
    /// The rent total as a one-cell table.
    pub fn total_table(&self) -> QueryResult {
        QueryResult::new(
            vec![TOTAL_RENT_HEADER.to_string()],
            vec![vec![self.total_rent.to_string()]],
        )
    }
}

/// Select sites whose `Lease Years` equals `years`, in file order.
///
/// Rows are returned whole and verbatim. Every `Lease Years` value must
/// parse as an integer; rent only has to parse for matched rows, since only
/// those are summed. Rent is summed as given, with no assumption about the
/// period it covers.
pub fn lease_years_match(dataset: &Dataset, years: i64) -> Result<LeaseYearsMatch> {
    let mut rows = Vec::new();
    let mut total_rent = Decimal::ZERO;

    for site in dataset {
        if site.lease_years()? != years {
            continue;
        }
        total_rent = total_rent
            .checked_add(site.rent()?)
            .ok_or(MastError::RentOverflow { line: site.line })?;
        rows.push(site.row.clone());
    }

    Ok(LeaseYearsMatch {
        matched: QueryResult::new(dataset.headers.clone(), rows),
        total_rent,
    })
}
