//! Typed mast site records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::dates::parse_record_date;
use crate::error::MastError;
use crate::Result;

/// The columns of a mast site export, named as they appear in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    PropertyName,
    PropertyAddress,
    UnitName,
    TenantName,
    LeaseStartDate,
    LeaseEndDate,
    LeaseYears,
    CurrentRent,
}

impl Column {
    /// Every column, in the order the export lists them.
    pub const ALL: [Column; 8] = [
        Column::PropertyName,
        Column::PropertyAddress,
        Column::UnitName,
        Column::TenantName,
        Column::LeaseStartDate,
        Column::LeaseEndDate,
        Column::LeaseYears,
        Column::CurrentRent,
    ];

    /// Header text for this column.
    pub fn header(self) -> &'static str {
        match self {
            Column::PropertyName => "Property Name",
            Column::PropertyAddress => "Property Address",
            Column::UnitName => "Unit Name",
            Column::TenantName => "Tenant Name",
            Column::LeaseStartDate => "Lease Start Date",
            Column::LeaseEndDate => "Lease End Date",
            Column::LeaseYears => "Lease Years",
            Column::CurrentRent => "Current Rent",
        }
    }

    /// Header texts for a projection of columns.
    pub fn headers(columns: &[Column]) -> Vec<String> {
        columns.iter().map(|c| c.header().to_string()).collect()
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.header() == s)
            .ok_or_else(|| format!("Unknown column: {}", s))
    }
}

/// One leased mast site: a single data row of the export.
///
/// Field values are kept exactly as written in the file. Numeric and date
/// views are parsed on demand, so a query that does not need a field never
/// fails on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MastSite {
    /// 1-based line number in the source file
    pub line: u64,
    pub property_name: String,
    pub property_address: String,
    pub unit_name: String,
    pub tenant_name: String,
    pub lease_start_date: String,
    pub lease_end_date: String,
    pub lease_years: String,
    pub current_rent: String,
    /// Every field of the row, aligned with the dataset's headers
    pub row: Vec<String>,
}

impl MastSite {
    /// Raw value of a column.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::PropertyName => &self.property_name,
            Column::PropertyAddress => &self.property_address,
            Column::UnitName => &self.unit_name,
            Column::TenantName => &self.tenant_name,
            Column::LeaseStartDate => &self.lease_start_date,
            Column::LeaseEndDate => &self.lease_end_date,
            Column::LeaseYears => &self.lease_years,
            Column::CurrentRent => &self.current_rent,
        }
    }

    /// Raw values for a projection of columns.
    pub fn project(&self, columns: &[Column]) -> Vec<String> {
        columns.iter().map(|&c| self.get(c).to_string()).collect()
    }

    /// Current rent as an exact decimal.
    ///
    /// Values beyond the `Decimal` range (about 7.9e28) are rejected as
    /// `InvalidNumber`.
    pub fn rent(&self) -> Result<Decimal> {
        Decimal::from_str(self.current_rent.trim())
            .map_err(|_| self.invalid_number(Column::CurrentRent))
    }

    /// Lease length in whole years.
    pub fn lease_years(&self) -> Result<i64> {
        self.lease_years
            .trim()
            .parse::<i64>()
            .map_err(|_| self.invalid_number(Column::LeaseYears))
    }

    /// Lease start as a calendar date.
    pub fn lease_start(&self) -> Result<NaiveDate> {
        self.parse_date(Column::LeaseStartDate)
    }

    /// Lease end as a calendar date.
    pub fn lease_end(&self) -> Result<NaiveDate> {
        self.parse_date(Column::LeaseEndDate)
    }

    fn parse_date(&self, column: Column) -> Result<NaiveDate> {
        parse_record_date(self.get(column)).map_err(|_| MastError::InvalidLeaseDate {
            column: column.header(),
            line: self.line,
            value: self.get(column).to_string(),
        })
    }

    fn invalid_number(&self, column: Column) -> MastError {
        MastError::InvalidNumber {
            column: column.header(),
            line: self.line,
            value: self.get(column).to_string(),
        }
    }
}
