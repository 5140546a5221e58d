//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::decode::decode_document;
use crate::error::ExtractorError;
use crate::project_info::parse_project_block;
use crate::researcher_info::parse_researcher_block;
use crate::segment::{split_segments, BlockLocator};
use crate::types::DocumentExtraction;
use pcert_domain::ResearcherRecord;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The Extractor converts certificate exports into records
///
/// Extraction is pure and deterministic: the same text always yields the same
/// records in the same order. An `Extractor` holds no per-document state and
/// can be shared freely.
pub struct Extractor {
    config: ExtractorConfig,
    locator: BlockLocator,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let locator = BlockLocator::new(&config)?;
        Ok(Self { config, locator })
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read, decode and extract one document
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<DocumentExtraction, ExtractorError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ExtractorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        self.extract_bytes(&bytes)
    }

    /// Decode and extract one document
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<DocumentExtraction, ExtractorError> {
        if bytes.len() > self.config.max_document_bytes {
            return Err(ExtractorError::DocumentTooLarge(
                bytes.len(),
                self.config.max_document_bytes,
            ));
        }
        let text = decode_document(bytes, &self.config.encoding)?;
        Ok(self.extract_text(&text))
    }

    /// Extract records from already decoded text
    pub fn extract_text(&self, text: &str) -> DocumentExtraction {
        let mut extraction = DocumentExtraction::default();

        for segment in split_segments(text, &self.config.certificate_header) {
            extraction.stats.segments += 1;
            self.extract_segment(segment, &mut extraction);
        }

        extraction
    }

    /// Extract one certificate segment; a segment missing a block yields nothing
    fn extract_segment(&self, segment: &str, extraction: &mut DocumentExtraction) {
        let Some(blocks) = self.locator.locate(segment) else {
            extraction.stats.segments_skipped += 1;
            return;
        };

        let project = parse_project_block(blocks.project_info);
        let project_id = project.project_id.clone().unwrap_or_default();
        let project_title = project.title.clone().unwrap_or_default();

        if project.has_project_id() {
            extraction.projects.push(project);
        } else {
            extraction.stats.projects_without_id += 1;
        }

        let researcher = parse_researcher_block(blocks.researcher_info);
        extraction.stats.detail_lines_discarded += researcher.discarded_lines;

        extraction
            .researchers
            .extend(researcher.details.into_iter().map(|detail| ResearcherRecord {
                project_id: project_id.clone(),
                project_title: project_title.clone(),
                person_name: researcher.identity.name.clone(),
                national_id: researcher.identity.national_id.clone(),
                researcher_type: detail.researcher_type,
                track_type: detail.track_type,
                affiliation: detail.affiliation,
                participation_period: detail.participation_period,
            }));
    }
}
