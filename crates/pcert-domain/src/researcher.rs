//! Researcher module - participation lines and their joined table rows

/// Column headers of a per-person participation table.
///
/// The funding agency is joined in from the project registry and sits third.
pub const PARTICIPATION_COLUMNS: [&str; 9] = [
    "과제번호",
    "과 제 명",
    "지원기관",
    "성명",
    "주민번호",
    "연구원구분",
    "과정구분",
    "소속",
    "참여기간",
];

/// One participation line of one person in one project.
///
/// Records are immutable once extracted and are never de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResearcherRecord {
    /// Project number this line belongs to (may reference no registry entry)
    pub project_id: String,

    /// Project title as given in the same segment
    pub project_title: String,

    /// Person name (성명)
    pub person_name: String,

    /// National identification number (주민번호), opaque and sensitive
    pub national_id: String,

    /// Researcher type (연구원구분)
    pub researcher_type: String,

    /// Track type (과정구분)
    pub track_type: String,

    /// Affiliation (소속)
    pub affiliation: String,

    /// Participation period as written, `"YYYY-MM-DD ~ YYYY-MM-DD"`
    pub participation_period: String,
}

/// A researcher record joined with the funding agency of its project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipationRow {
    /// The extracted record
    pub record: ResearcherRecord,

    /// Funding agency of the referenced project, `None` when no project matched
    pub funding_agency: Option<String>,
}

impl ParticipationRow {
    /// Join a record with a funding agency
    pub fn new(record: ResearcherRecord, funding_agency: Option<String>) -> Self {
        Self {
            record,
            funding_agency,
        }
    }

    /// Copy of this row with a different participation period
    pub fn with_period(&self, period: impl Into<String>) -> Self {
        let mut row = self.clone();
        row.record.participation_period = period.into();
        row
    }

    /// Cell values in [`PARTICIPATION_COLUMNS`] order
    pub fn cells(&self) -> Vec<String> {
        let r = &self.record;
        vec![
            r.project_id.clone(),
            r.project_title.clone(),
            self.funding_agency.clone().unwrap_or_default(),
            r.person_name.clone(),
            r.national_id.clone(),
            r.researcher_type.clone(),
            r.track_type.clone(),
            r.affiliation.clone(),
            r.participation_period.clone(),
        ]
    }
}
