//! Error types for the Period Merger

use thiserror::Error;

/// Errors that can occur while merging periods
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// A period string is not `"<start> ~ <end>"` with two ISO dates
    #[error("Invalid participation period '{period}': {reason}")]
    Format {
        /// The offending period, as written
        period: String,
        /// What was wrong with it
        reason: String,
    },
}

impl MergeError {
    pub(crate) fn format(period: &str, reason: impl Into<String>) -> Self {
        MergeError::Format {
            period: period.to_string(),
            reason: reason.into(),
        }
    }
}
