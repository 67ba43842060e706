//! Source loading: turn an export file into a dataset.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **File checks**: fail early when the input path is missing
//! - **Loading**: parse CSV into typed `MastSite` records, validating the
//!   header once
//!
//! ## Example
//!
//! ```rust,ignore
//! use mastreportlib::source::{check_file_exists, load_dataset};
//!
//! check_file_exists("masts.csv")?;
//! let dataset = load_dataset("masts.csv")?;
//! ```

pub mod loader;

pub use loader::{check_file_exists, load_dataset, read_dataset};
