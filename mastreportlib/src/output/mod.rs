//! Output formatting: present query results as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! laying query results out for display. It provides:
//!
//! - **TableLayout**: header, separator and row lines, padded and aligned
//!
//! TableLayout is a pure presentation layer - it only formats strings.
//! All filtering, counting, and sorting happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mastreportlib::output::TableLayout;
//!
//! let table = TableLayout::from_result(&tenant_census(&dataset));
//! print!("{}", table.render());
//! ```

pub mod table;

pub use table::TableLayout;
