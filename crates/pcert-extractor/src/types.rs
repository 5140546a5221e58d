//! Extraction result types

use pcert_domain::{ProjectRecord, ResearcherRecord};

/// Records extracted from one or more documents, in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentExtraction {
    /// Project records with a non-empty project number
    pub projects: Vec<ProjectRecord>,

    /// One record per valid detail line
    pub researchers: Vec<ResearcherRecord>,

    /// What was seen and what was dropped
    pub stats: ExtractionStats,
}

/// Counters for structural skips, which are never reported as errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Non-blank certificate segments
    pub segments: usize,

    /// Segments missing the project-info or researcher-info block
    pub segments_skipped: usize,

    /// Segments whose project-info block had no project number
    pub projects_without_id: usize,

    /// Non-blank detail lines with fewer than four cells
    pub detail_lines_discarded: usize,
}

impl ExtractionStats {
    /// Add another set of counters to this one
    pub fn absorb(&mut self, other: &ExtractionStats) {
        self.segments += other.segments;
        self.segments_skipped += other.segments_skipped;
        self.projects_without_id += other.projects_without_id;
        self.detail_lines_discarded += other.detail_lines_discarded;
    }

    /// Whether anything was dropped
    pub fn has_skips(&self) -> bool {
        self.segments_skipped > 0 || self.projects_without_id > 0 || self.detail_lines_discarded > 0
    }
}

impl DocumentExtraction {
    /// Append another extraction, keeping document order
    pub fn append(&mut self, other: DocumentExtraction) {
        self.projects.extend(other.projects);
        self.researchers.extend(other.researchers);
        self.stats.absorb(&other.stats);
    }

    /// Whether no records were extracted at all
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.researchers.is_empty()
    }
}
