//! Input discovery and batch extraction.

use crate::error::{CliError, Result};
use pcert_extractor::{DocumentExtraction, Extractor, ExtractorError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of extracting a batch of documents.
#[derive(Debug)]
pub struct Batch {
    /// Records of every readable document, in input order
    pub extraction: DocumentExtraction,

    /// Documents that were read
    pub documents_read: usize,

    /// Documents that could not be read or decoded
    pub failures: Vec<(PathBuf, ExtractorError)>,
}

/// Expand inputs into document paths.
///
/// A directory contributes its `.txt` files (extension matched ignoring case),
/// sorted by path. Any other input is taken as a document, even if it does not
/// exist; reading it will report the problem.
pub fn discover_documents(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = text_files_in(input)?;
            debug!("{:?}: {} document(s)", input, found.len());
            documents.append(&mut found);
        } else {
            documents.push(input.clone());
        }
    }
    Ok(documents)
}

fn text_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_text = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_text && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extract every document, continuing past per-document failures.
///
/// Fails with [`CliError::NoDocuments`] when no document could be read, and
/// immediately on errors that are not confined to one document.
pub fn extract_documents(extractor: &Extractor, documents: &[PathBuf]) -> Result<Batch> {
    let mut batch = Batch {
        extraction: DocumentExtraction::default(),
        documents_read: 0,
        failures: Vec::new(),
    };

    for path in documents {
        match extractor.extract_file(path) {
            Ok(extraction) => {
                debug!(
                    "{:?}: {} project(s), {} researcher row(s)",
                    path,
                    extraction.projects.len(),
                    extraction.researchers.len()
                );
                batch.extraction.append(extraction);
                batch.documents_read += 1;
            }
            Err(e) if e.is_document_error() => {
                warn!("Skipping {:?}: {}", path, e);
                batch.failures.push((path.clone(), e));
            }
            Err(e) => return Err(e.into()),
        }
    }

    if batch.documents_read == 0 {
        return Err(CliError::NoDocuments);
    }

    info!(
        "Read {} document(s), {} failed",
        batch.documents_read,
        batch.failures.len()
    );
    Ok(batch)
}
