//! Lease date parsing and formatting.
//!
//! Three textual date encodings meet in this crate:
//!
//! - record fields (`Lease Start Date`, `Lease End Date`): `29 Apr 2008`
//! - lease window bounds supplied by the caller: `2000-01-30`
//! - dates shown in lease window output: `29/04/2008`
//!
//! Each has one named format constant here; nothing else in the crate spells
//! out a format string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MastError;
use crate::Result;

/// Format of dates stored in the input file.
pub const RECORD_DATE_FORMAT: &str = "%d %b %Y";

/// Format of lease window bounds.
pub const WINDOW_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when displaying lease window matches.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Human-readable forms of the formats above, for error messages.
const RECORD_DATE_HINT: &str = "DD Mon YYYY";
const WINDOW_DATE_HINT: &str = "YYYY-MM-DD";

/// Parse a date as stored in a record field.
pub fn parse_record_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), RECORD_DATE_FORMAT).map_err(|_| {
        MastError::InvalidDate {
            value: value.to_string(),
            expected: RECORD_DATE_HINT,
        }
    })
}

/// Parse a lease window bound.
pub fn parse_window_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), WINDOW_DATE_FORMAT).map_err(|_| {
        MastError::InvalidDate {
            value: value.to_string(),
            expected: WINDOW_DATE_HINT,
        }
    })
}

/// Render a date in the display format (`DD/MM/YYYY`).
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// An inclusive range of calendar dates.
///
/// Both ends match: a lease starting exactly on `start` or `end` is inside
/// the window. A window whose start falls after its end contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LeaseWindow {
    /// Create a window from two dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse a window from two `YYYY-MM-DD` strings.
    ///
    /// Fails on the first bound that does not parse.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_window_date(start)?,
            end: parse_window_date(end)?,
        })
    }

    /// Whether `date` lies within the window, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_record_date() {
        assert_eq!(parse_record_date("29 Apr 2008").unwrap(), ymd(2008, 4, 29));
        assert_eq!(parse_record_date("01 Dec 2019").unwrap(), ymd(2019, 12, 1));
    }

    #[test]
    fn test_parse_record_date_rejects_other_formats() {
        assert!(parse_record_date("2008-04-29").is_err());
        assert!(parse_record_date("29/04/2008").is_err());
        assert!(parse_record_date("").is_err());
    }

    #[test]
    fn test_parse_window_date() {
        assert_eq!(parse_window_date("2000-01-30").unwrap(), ymd(2000, 1, 30));
        let err = parse_window_date("30 Jan 2000").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(ymd(2008, 4, 29)), "29/04/2008");
        assert_eq!(display_date(ymd(2019, 12, 1)), "01/12/2019");
    }

    #[test]
    fn test_window_is_inclusive() {
        let window = LeaseWindow::parse("2000-01-30", "2010-12-31").unwrap();
        assert!(window.contains(ymd(2000, 1, 30)));
        assert!(window.contains(ymd(2010, 12, 31)));
        assert!(window.contains(ymd(2008, 4, 29)));
        assert!(!window.contains(ymd(2000, 1, 29)));
        assert!(!window.contains(ymd(2011, 1, 1)));
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let window = LeaseWindow::new(ymd(2010, 1, 1), ymd(2000, 1, 1));
        assert!(!window.contains(ymd(2005, 1, 1)));
        assert!(!window.contains(ymd(2010, 1, 1)));
    }

    #[test]
    fn test_window_parse_fails_on_bad_bound() {
        assert!(LeaseWindow::parse("2000-13-01", "2010-12-31").is_err());
        assert!(LeaseWindow::parse("2000-01-01", "not a date").is_err());
    }
}
