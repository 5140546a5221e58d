//! Participation period parsing and formatting

use crate::error::MergeError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Date format used on both sides of a period
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive day range, ordered by start date then end date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRange {
    /// First day
    pub start: NaiveDate,
    /// Last day
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from its two ends
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `next` starts exactly one calendar day after this range ends
    pub fn is_followed_by(&self, next: &DateRange) -> bool {
        self.end.succ_opt() == Some(next.start)
    }
}

impl FromStr for DateRange {
    type Err = MergeError;

    /// Parse `"YYYY-MM-DD ~ YYYY-MM-DD"`; spaces around `~` are optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('~');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MergeError::format(s, "expected exactly one '~' separator"));
        };

        Ok(Self {
            start: parse_date(s, start)?,
            end: parse_date(s, end)?,
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ~ {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

fn parse_date(period: &str, side: &str) -> Result<NaiveDate, MergeError> {
    let side = side.trim();
    NaiveDate::parse_from_str(side, DATE_FORMAT)
        .map_err(|e| MergeError::format(period, format!("'{}' is not a YYYY-MM-DD date ({})", side, e)))
}
