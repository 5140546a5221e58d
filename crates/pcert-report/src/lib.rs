//! pcert Report
//!
//! Consolidates extracted records from many documents into output tables and
//! writes them to a tabular sink.
//!
//! # Tables
//!
//! - the project registry: every distinct project row, in first-seen order
//! - one table per person: their participation rows, with the project's
//!   funding agency joined in as the third column
//! - one merged table per person: the same rows with contiguous periods merged
//!
//! # Architecture
//!
//! ```text
//! records → consolidate → Consolidated → tables → TableSink (xlsx | csv)
//! ```

#![warn(missing_docs)]

mod consolidate;
mod error;
mod naming;
mod sink;
mod table;

pub use consolidate::{consolidate, dedup_registry, join_funding_agency, Consolidated, PersonSheets};
pub use error::ReportError;
pub use naming::{output_file_name, sanitize_file_stem, sanitize_sheet_name, SheetNaming, MAX_SHEET_NAME_CHARS};
pub use sink::{write_report, CsvSink, TableSink, XlsxSink};
pub use table::Table;
