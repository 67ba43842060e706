//! Data model: typed mast site records and the dataset that holds them.
//!
//! This module covers the second stage of the pipeline. It provides:
//!
//! - **Sites**: `MastSite`, one typed record per data row, and `Column`
//! - **Dataset**: the ordered, read-only collection all queries run over
//! - **Dates**: the three date encodings and the inclusive `LeaseWindow`
//!
//! ## Example
//!
//! ```rust,ignore
//! use mastreportlib::data::{Column, LeaseWindow};
//!
//! let window = LeaseWindow::parse("2000-01-30", "2010-12-31")?;
//! for site in &dataset {
//!     if window.contains(site.lease_start()?) {
//!         println!("{}", site.get(Column::PropertyName));
//!     }
//! }
//! ```

pub mod dataset;
pub mod dates;
pub mod site;

pub use dataset::Dataset;
pub use dates::{
    display_date, parse_record_date, parse_window_date, LeaseWindow, DISPLAY_DATE_FORMAT,
    RECORD_DATE_FORMAT, WINDOW_DATE_FORMAT,
};
pub use site::{Column, MastSite};
