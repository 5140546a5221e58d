//! Command implementations.

pub mod config;
pub mod export;
pub mod preview;

pub use self::config::execute_config;
pub use self::export::execute_export;
pub use self::preview::execute_preview;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::input::{discover_documents, extract_documents};
use crate::output::Formatter;
use pcert_extractor::Extractor;
use pcert_report::{consolidate, Consolidated};
use std::path::PathBuf;

/// Extract all inputs and consolidate them, reporting failed documents and
/// structural skips on stderr.
pub(crate) fn consolidate_inputs(
    inputs: &[PathBuf],
    config: &Config,
    formatter: &Formatter,
) -> Result<Consolidated> {
    let extractor = Extractor::new(config.extractor.clone())?;
    let documents = discover_documents(inputs)?;
    let batch = extract_documents(&extractor, &documents)?;

    if formatter.format() == OutputFormat::Table {
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Read {} of {} document(s)",
                batch.documents_read,
                documents.len()
            ))
        );
    }
    for (path, error) in &batch.failures {
        eprintln!("{}", formatter.error(&format!("{}: {}", path.display(), error)));
    }
    if let Some(message) = formatter.extraction_stats(&batch.extraction.stats) {
        eprintln!("{}", message);
    }

    let extraction = batch.extraction;
    Ok(consolidate(&extraction.projects, &extraction.researchers)?)
}
