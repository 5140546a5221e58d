//! Error types for the CLI application.

use pcert_extractor::ExtractorError;
use pcert_report::ReportError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractorError),

    /// Report error
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// None of the inputs yielded a readable document
    #[error("No readable documents among the given inputs")]
    NoDocuments,
}
