//! pcert Period Merger
//!
//! Collapses participation periods that follow each other day by day into the
//! fewest equivalent ranges.
//!
//! # Adjacency rule
//!
//! Periods are sorted by start date (then end date) and folded left to right.
//! A period is appended to the open range only when it starts exactly one
//! calendar day after that range ends. Overlapping periods are NOT unioned;
//! they stay separate entries.
//!
//! ```
//! use pcert_merger::merge_periods;
//!
//! let merged = merge_periods(&[
//!     "2024-01-11 ~ 2024-01-20",
//!     "2024-01-01 ~ 2024-01-10",
//!     "2024-03-01 ~ 2024-03-31",
//! ])
//! .unwrap();
//!
//! assert_eq!(merged, vec!["2024-01-01 ~ 2024-01-20", "2024-03-01 ~ 2024-03-31"]);
//! ```
//!
//! # Grouping
//!
//! [`merge_rows`] applies the rule to participation rows that agree on every
//! field except the period, see [`GroupKey`].

#![warn(missing_docs)]

mod error;
mod grouping;
mod merge;
mod period;

pub use error::MergeError;
pub use grouping::{merge_rows, GroupKey};
pub use merge::{merge_periods, merge_ranges};
pub use period::{DateRange, DATE_FORMAT};
