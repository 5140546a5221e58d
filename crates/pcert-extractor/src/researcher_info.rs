//! Researcher-info block parsing

use regex::Regex;
use std::sync::OnceLock;

static RE_NAME: OnceLock<Regex> = OnceLock::new();
static RE_NATIONAL_ID: OnceLock<Regex> = OnceLock::new();

/// The four positional cells of a participation detail line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipationDetail {
    /// Researcher type (연구원구분)
    pub researcher_type: String,
    /// Track type (과정구분)
    pub track_type: String,
    /// Affiliation (소속)
    pub affiliation: String,
    /// Participation period, kept as written
    pub participation_period: String,
}

impl ParticipationDetail {
    /// Number of cells a detail line must provide
    pub const ARITY: usize = 4;

    /// Build a detail from a line's cells
    ///
    /// Returns `None` for a malformed line with fewer than [`Self::ARITY`]
    /// cells. Cells beyond the fourth are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcert_extractor::ParticipationDetail;
    ///
    /// let detail = ParticipationDetail::from_cells(&["A", "B", "C", "2024-01-01 ~ 2024-01-31"]);
    /// assert_eq!(detail.unwrap().affiliation, "C");
    ///
    /// assert!(ParticipationDetail::from_cells(&["A", "B", "C"]).is_none());
    /// ```
    pub fn from_cells(cells: &[&str]) -> Option<Self> {
        match cells {
            [researcher_type, track_type, affiliation, participation_period, ..] => Some(Self {
                researcher_type: researcher_type.trim().to_string(),
                track_type: track_type.trim().to_string(),
                affiliation: affiliation.trim().to_string(),
                participation_period: participation_period.trim().to_string(),
            }),
            _ => None,
        }
    }
}

/// Name and national ID read from a block's first line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Identity {
    pub name: String,
    pub national_id: String,
}

/// A parsed researcher-info block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResearcherBlock {
    pub identity: Identity,
    pub details: Vec<ParticipationDetail>,
    pub discarded_lines: usize,
}

/// Parse a researcher-info block
///
/// Line 0 carries the identity, line 1 is a column header and is skipped,
/// lines 2.. are detail lines. Blank detail lines are ignored; short ones are
/// counted as discarded.
pub(crate) fn parse_researcher_block(block: &str) -> ResearcherBlock {
    let lines: Vec<&str> = block.trim().split('\n').collect();
    let identity = lines.first().map(|line| parse_identity(line)).unwrap_or_default();

    let mut details = Vec::new();
    let mut discarded_lines = 0;

    for line in lines.iter().skip(2) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split('\t').collect();
        match ParticipationDetail::from_cells(&cells) {
            Some(detail) => details.push(detail),
            None => discarded_lines += 1,
        }
    }

    ResearcherBlock {
        identity,
        details,
        discarded_lines,
    }
}

/// Read `성명:` and `주민번호:` values; each runs to the next tab
pub(crate) fn parse_identity(line: &str) -> Identity {
    let re_name = RE_NAME.get_or_init(|| Regex::new(r"성명:\s*([^\t]+)").expect("valid name pattern"));
    let re_id = RE_NATIONAL_ID
        .get_or_init(|| Regex::new(r"주민번호:\s*([^\t]+)").expect("valid national id pattern"));

    Identity {
        name: labeled_value(re_name, line),
        national_id: labeled_value(re_id, line),
    }
}

fn labeled_value(pattern: &Regex, line: &str) -> String {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
