//! Error types for consolidation and output

use pcert_merger::MergeError;
use thiserror::Error;

/// Errors that can occur while building or writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// A participation period could not be merged
    #[error("Cannot merge periods for '{person}': {source}")]
    Merge {
        /// Person whose rows were being merged
        person: String,
        /// Underlying format error
        source: MergeError,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet writer error
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
