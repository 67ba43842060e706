//! Load a mast site export into a `Dataset`.
//!
//! The header row defines the schema. Every required column is located once
//! here, so queries can read named fields without re-checking the header.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::data::{Column, Dataset, MastSite};
use crate::error::MastError;
use crate::Result;

/// Fail with `FileNotFound` unless `path` is an existing regular file.
pub fn check_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_file() {
        Ok(())
    } else {
        Err(MastError::FileNotFound(path.to_path_buf()))
    }
}

/// Load a dataset from a CSV file on disk.
///
/// # Example
///
/// ```rust
/// use mastreportlib::load_dataset;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("masts.csv");
/// fs::write(&path, "Property Name,Property Address,Unit Name,Tenant Name,\
/// Lease Start Date,Lease End Date,Lease Years,Current Rent\n\
/// Farmhouse 1,Field Y,Unit 1,CellWorks Ltd,29 Apr 2002,28 Apr 2020,18,500\n").unwrap();
///
/// let dataset = load_dataset(&path).unwrap();
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.sites[0].tenant_name, "CellWorks Ltd");
/// ```
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    check_file_exists(path)?;

    let file = File::open(path).map_err(|source| MastError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_dataset(file)?;

    debug!(
        "loaded {} sites ({} columns) from {}",
        dataset.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}

/// Read a dataset from any CSV source.
///
/// Rows may carry more fields than the header (a trailing delimiter is
/// common in exports); the surplus is dropped. Rows with fewer fields are
/// rejected.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();
    let schema = Schema::resolve(&headers)?;

    let mut sites = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        // Header is line 1; fall back to counting rows if position is unknown.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        sites.push(schema.build_site(&record, line)?);
    }

    Ok(Dataset::new(headers, sites))
}

/// Position of each required column within the header row.
struct Schema {
    width: usize,
    indices: [usize; Column::ALL.len()],
}

impl Schema {
    fn resolve(headers: &[String]) -> Result<Self> {
        let mut indices = [0; Column::ALL.len()];
        for (slot, column) in indices.iter_mut().zip(Column::ALL) {
            *slot = headers
                .iter()
                .position(|h| h == column.header())
                .ok_or_else(|| MastError::MissingColumn(column.header().to_string()))?;
        }
        Ok(Self {
            width: headers.len(),
            indices,
        })
    }

    fn field(&self, record: &StringRecord, column: Column) -> String {
        let index = self.indices[column as usize];
        record.get(index).unwrap_or_default().to_string()
    }

    fn build_site(&self, record: &StringRecord, line: u64) -> Result<MastSite> {
        if record.len() < self.width {
            return Err(MastError::ShortRow {
                line,
                expected: self.width,
                found: record.len(),
            });
        }

        Ok(MastSite {
            line,
            property_name: self.field(record, Column::PropertyName),
            property_address: self.field(record, Column::PropertyAddress),
            unit_name: self.field(record, Column::UnitName),
            tenant_name: self.field(record, Column::TenantName),
            lease_start_date: self.field(record, Column::LeaseStartDate),
            lease_end_date: self.field(record, Column::LeaseEndDate),
            lease_years: self.field(record, Column::LeaseYears),
            current_rent: self.field(record, Column::CurrentRent),
            row: record
                .iter()
                .take(self.width)
                .map(String::from)
                .collect(),
        })
    }
}
