//! Query processing: the four read-only reports over a dataset.
//!
//! This module handles the third stage of the pipeline. Every query takes
//! the dataset by shared reference and returns display-ready rows; none of
//! them logs, prints, or depends on another's output. It provides:
//!
//! - **Rent ranking**: `top_rents`
//! - **Lease-years matching**: `lease_years_match`, with a rent total
//! - **Tenant census**: `tenant_census`
//! - **Lease window matching**: `lease_window_match`
//! - **Options**: `ReportOptions` selects which of them a report runs
//!
//! ## Example
//!
//! ```rust,ignore
//! use mastreportlib::query::{ReportOptions, OrderDirection};
//!
//! let sections = ReportOptions::new()
//!     .top_rents(5)
//!     .rent_direction(OrderDirection::Ascending)
//!     .tenants(true)
//!     .run(&dataset)?;
//! ```

pub mod lease_window;
pub mod lease_years;
pub mod options;
pub mod rent;
pub mod result;
pub mod tenants;

pub use lease_window::{lease_window_match, LEASE_WINDOW_COLUMNS};
pub use lease_years::{lease_years_match, LeaseYearsMatch, TOTAL_RENT_HEADER};
pub use options::{OrderDirection, Query, ReportOptions};
pub use rent::{top_rents, RENT_RANK_COLUMNS};
pub use result::{QueryResult, ReportSection};
pub use tenants::{tenant_census, MAST_COUNT_HEADER};
