//! Tenant census: how many mast sites each tenant holds.

use std::collections::HashMap;

use super::result::QueryResult;
use crate::data::{Column, Dataset};

/// Header of the site count column.
pub const MAST_COUNT_HEADER: &str = "Number of Masts";

/// Count sites per tenant name.
///
/// Names are taken literally: entries that differ only in case or spacing
/// are separate tenants. Rows appear in order of each tenant's first
/// occurrence in the file.
pub fn tenant_census(dataset: &Dataset) -> QueryResult {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for site in dataset {
        let name = site.tenant_name.as_str();
        let slot = *index.entry(name).or_insert_with(|| {
            counts.push((name, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let rows = counts
        .into_iter()
        .map(|(name, count)| vec![name.to_string(), count.to_string()])
        .collect();

    QueryResult::new(
        vec![
            Column::TenantName.header().to_string(),
            MAST_COUNT_HEADER.to_string(),
        ],
        rows,
    )
}
