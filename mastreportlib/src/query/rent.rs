//! Rent ranking: the N sites with the lowest (or highest) current rent.

use rust_decimal::Decimal;

use super::options::OrderDirection;
use super::result::QueryResult;
use crate::data::{Column, Dataset, MastSite};
use crate::Result;

/// Columns shown for ranked sites.
pub const RENT_RANK_COLUMNS: [Column; 4] = [
    Column::PropertyName,
    Column::UnitName,
    Column::TenantName,
    Column::CurrentRent,
];

/// Rank sites by numeric current rent and keep the first `count`.
///
/// Ordering is numeric, not lexical, and stable: sites with equal rent keep
/// their file order in either direction. Rents are shown exactly as written
/// in the file. Every rent in the dataset must parse, even those that end
/// up outside the top `count`.
pub fn top_rents(
    dataset: &Dataset,
    count: usize,
    direction: OrderDirection,
) -> Result<QueryResult> {
    let mut ranked: Vec<(Decimal, &MastSite)> = dataset
        .iter()
        .map(|site| site.rent().map(|rent| (rent, site)))
        .collect::<Result<_>>()?;

    match direction {
        OrderDirection::Ascending => ranked.sort_by(|a, b| a.0.cmp(&b.0)),
        OrderDirection::Descending => ranked.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    let rows = ranked
        .into_iter()
        .take(count)
        .map(|(_, site)| site.project(&RENT_RANK_COLUMNS))
        .collect();

    Ok(QueryResult::new(Column::headers(&RENT_RANK_COLUMNS), rows))
}
