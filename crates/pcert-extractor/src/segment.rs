//! Certificate segmentation and block location

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use regex::Regex;

/// Split a document into certificate segments
///
/// Fragments that are empty or whitespace-only are dropped.
pub(crate) fn split_segments<'a>(text: &'a str, header: &'a str) -> impl Iterator<Item = &'a str> {
    text.split(header).filter(|fragment| !fragment.trim().is_empty())
}

/// The two labeled blocks of one segment, untrimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Blocks<'a> {
    pub project_info: &'a str,
    pub researcher_info: &'a str,
}

/// Locates the project-info and researcher-info blocks inside a segment
pub(crate) struct BlockLocator {
    project_block: Regex,
    researcher_block: Regex,
}

impl BlockLocator {
    /// Compile the block patterns from the configured markers
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let project = regex::escape(&config.project_marker);
        let researcher = regex::escape(&config.researcher_marker);
        let margin = regex::escape(&config.blank_margin_marker);

        // Project info: everything up to the first researcher marker.
        let project_block = Regex::new(&format!(r"(?s){project}(.*?){researcher}"))?;

        // Researcher info ends at the blank-margin marker, at a line that starts
        // with a four-digit year followed by 년, or at the end of the segment.
        let researcher_block = Regex::new(&format!(
            r"(?s){researcher}(.*?)(?:{margin}|(?m:^[ \t]*[0-9]{{4}}년)|\z)"
        ))?;

        Ok(Self {
            project_block,
            researcher_block,
        })
    }

    /// Find both blocks, or `None` if either is absent
    pub fn locate<'a>(&self, segment: &'a str) -> Option<Blocks<'a>> {
        let project_info = self.project_block.captures(segment)?.get(1)?.as_str();
        let researcher_info = self.researcher_block.captures(segment)?.get(1)?.as_str();
        Some(Blocks {
            project_info,
            researcher_info,
        })
    }
}
