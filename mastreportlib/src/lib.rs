//! # mastreportlib
//!
//! Analytical queries over leased mobile phone mast sites.
//!
//! ## Overview
//!
//! A mast site export is a CSV file with one row per leased site: property,
//! unit, tenant, lease dates, lease length and current rent. This library
//! loads such a file once and answers four independent questions about it:
//!
//! - **Rent ranking**: the N sites with the lowest (or highest) current rent
//! - **Lease-years matching**: sites with an exact lease length, and their total rent
//! - **Tenant census**: how many sites each tenant holds
//! - **Lease window matching**: sites whose lease started within a date range
//!
//! ## Pipeline
//!
//! 1. `source`: read the file into a `Dataset` of typed `MastSite` records
//! 2. `data`: records, dates, and the inclusive `LeaseWindow`
//! 3. `query`: the four queries, each returning a `QueryResult`
//! 4. `output`: lay a `QueryResult` out as aligned text
//!
//! Queries never mutate the dataset, never log, and never print.
//!
//! ## Example
//!
//! ```rust
//! use mastreportlib::{read_dataset, tenant_census, top_rents, OrderDirection};
//!
//! let csv = "Property Name,Property Address,Unit Name,Tenant Name,\
//! Lease Start Date,Lease End Date,Lease Years,Current Rent\n\
//! Farmhouse 2,Field X,Unit 2,CellWorks Ltd,29 Apr 2008,28 Apr 2018,10,700\n\
//! Farmhouse 1,Field Y,Unit 1,CellWorks Ltd,29 Apr 2002,28 Apr 2020,18,500\n";
//!
//! let dataset = read_dataset(csv.as_bytes()).unwrap();
//!
//! let cheapest = top_rents(&dataset, 1, OrderDirection::Ascending).unwrap();
//! assert_eq!(cheapest.rows[0][0], "Farmhouse 1");
//!
//! let tenants = tenant_census(&dataset);
//! assert_eq!(tenants.rows, vec![vec!["CellWorks Ltd", "2"]]);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{Column, Dataset, LeaseWindow, MastSite};
pub use error::MastError;
pub use output::TableLayout;
pub use query::{
    lease_window_match, lease_years_match, tenant_census, top_rents, LeaseYearsMatch,
    OrderDirection, Query, QueryResult, ReportOptions, ReportSection,
};
pub use source::{check_file_exists, load_dataset, read_dataset};

/// Result type for mastreportlib operations
pub type Result<T> = std::result::Result<T, MastError>;
