//! Report options: which queries to run and how.
//!
//! `ReportOptions` is the only configuration the library takes. Each field
//! selects one query; unset fields are skipped.

use serde::{Deserialize, Serialize};

use super::lease_window::lease_window_match;
use super::lease_years::lease_years_match;
use super::rent::top_rents;
use super::result::ReportSection;
use super::tenants::tenant_census;
use crate::data::{Dataset, LeaseWindow, WINDOW_DATE_FORMAT};
use crate::Result;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (smallest first)
    #[default]
    Ascending,
    /// Descending (largest first)
    Descending,
}

impl OrderDirection {
    fn describe(self) -> &'static str {
        match self {
            OrderDirection::Ascending => "ascending",
            OrderDirection::Descending => "descending",
        }
    }
}

/// One query, with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// Top N sites by current rent
    TopRents {
        count: usize,
        direction: OrderDirection,
    },
    /// Sites with an exact lease length, plus their total rent
    LeaseYears { years: i64 },
    /// Number of sites per tenant
    Tenants,
    /// Sites whose lease started inside the window
    LeaseWindow { window: LeaseWindow },
}

impl Query {
    /// Describe what this query reports.
    pub fn title(&self) -> String {
        match self {
            Query::TopRents { count, direction } => format!(
                "Top {} mobile phone mast sites in {} order of current rent",
                count,
                direction.describe()
            ),
            Query::LeaseYears { years } => format!(
                "Mobile phone masts that have a lease of {} years, and their total rent",
                years
            ),
            Query::Tenants => "Tenants and the number of masts associated to them".to_string(),
            Query::LeaseWindow { window } => format!(
                "Rentals with a lease start date between {} and {}",
                window.start.format(WINDOW_DATE_FORMAT),
                window.end.format(WINDOW_DATE_FORMAT)
            ),
        }
    }

    /// Run the query over a dataset.
    pub fn run(&self, dataset: &Dataset) -> Result<ReportSection> {
        let title = self.title();
        let section = match *self {
            Query::TopRents { count, direction } => {
                ReportSection::single(title, top_rents(dataset, count, direction)?)
            }
            Query::LeaseYears { years } => {
                let result = lease_years_match(dataset, years)?;
                let total = result.total_table();
                ReportSection {
                    title,
                    tables: vec![result.matched, total],
                }
            }
            Query::Tenants => ReportSection::single(title, tenant_census(dataset)),
            Query::LeaseWindow { window } => {
                ReportSection::single(title, lease_window_match(dataset, &window)?)
            }
        };
        Ok(section)
    }
}

/// Which queries a report runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Number of sites to rank by rent
    pub top_rents: Option<usize>,
    /// Direction of the rent ranking
    pub rent_direction: OrderDirection,
    /// Lease length to match
    pub lease_years: Option<i64>,
    /// Whether to count sites per tenant
    pub tenants: bool,
    /// Lease start window to match
    pub lease_window: Option<LeaseWindow>,
}

impl ReportOptions {
    /// Create options with no query selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank `count` sites by current rent.
    pub fn top_rents(mut self, count: usize) -> Self {
        self.top_rents = Some(count);
        self
    }

    /// Set the rent ranking direction.
    pub fn rent_direction(mut self, direction: OrderDirection) -> Self {
        self.rent_direction = direction;
        self
    }

    /// Match sites with a lease of exactly `years`.
    pub fn lease_years(mut self, years: i64) -> Self {
        self.lease_years = Some(years);
        self
    }

    /// Enable or disable the tenant census.
    pub fn tenants(mut self, enabled: bool) -> Self {
        self.tenants = enabled;
        self
    }

    /// Match sites whose lease started within `window`.
    pub fn lease_window(mut self, window: LeaseWindow) -> Self {
        self.lease_window = Some(window);
        self
    }

    /// Whether no query is selected.
    pub fn is_empty(&self) -> bool {
        self.queries().is_empty()
    }

    /// Selected queries, in report order.
    pub fn queries(&self) -> Vec<Query> {
        let mut queries = Vec::new();
        if let Some(count) = self.top_rents {
            queries.push(Query::TopRents {
                count,
                direction: self.rent_direction,
            });
        }
        if let Some(years) = self.lease_years {
            queries.push(Query::LeaseYears { years });
        }
        if self.tenants {
            queries.push(Query::Tenants);
        }
        if let Some(window) = self.lease_window {
            queries.push(Query::LeaseWindow { window });
        }
        queries
    }

    /// Run every selected query, stopping at the first failure.
    pub fn run(&self, dataset: &Dataset) -> Result<Vec<ReportSection>> {
        self.queries().iter().map(|q| q.run(dataset)).collect()
    }
}
