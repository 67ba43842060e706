//! Error types for mastreportlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying mast site data
#[derive(Error, Debug)]
pub enum MastError {
    /// Input path does not resolve to an existing file
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to open or read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a column the queries need
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A data row has fewer fields than the header declares
    #[error("line {line}: expected {expected} fields, found {found}")]
    ShortRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A numeric field could not be parsed
    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidNumber {
        column: &'static str,
        line: u64,
        value: String,
    },

    /// Summing rents exceeded the decimal range
    #[error("line {line}: total rent overflows")]
    RentOverflow { line: u64 },

    /// A date string did not match its expected format
    #[error("invalid date '{value}' (expected format {expected})")]
    InvalidDate {
        value: String,
        expected: &'static str,
    },

    /// A record's lease date could not be parsed
    #[error("line {line}: invalid {column} '{value}'")]
    InvalidLeaseDate {
        column: &'static str,
        line: u64,
        value: String,
    },
}
