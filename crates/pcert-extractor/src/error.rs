//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Structural problems inside a document (missing blocks, short detail lines)
/// are not errors; they are counted in the extraction statistics instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Document bytes are not valid in the encoding used to decode them
    #[error("Document is not valid {encoding}")]
    Decode {
        /// Name of the encoding that rejected the bytes
        encoding: String,
    },

    /// Encoding label not known to the WHATWG registry
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// Document exceeds the configured size bound
    #[error("Document too large: {0} bytes (max: {1})")]
    DocumentTooLarge(usize, usize),

    /// A configured marker produced an invalid pattern
    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether this error is confined to a single document
    ///
    /// Batch callers report such errors and move on to the next document;
    /// the remaining variants mean the extractor itself is misconfigured.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            ExtractorError::Io { .. }
                | ExtractorError::Decode { .. }
                | ExtractorError::DocumentTooLarge(..)
        )
    }
}
