//! Project module - attributes read from a certificate's project-info block

/// A labeled attribute of a project-info block.
///
/// The set is closed: a cell is only treated as a label when it matches one of
/// these exactly (after trimming). The declaration order is the registry column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectField {
    /// 과제번호 - project number, the candidate key
    ProjectId,
    /// 연구기간
    Duration,
    /// 과 제 명 (the source spaces the characters out)
    Title,
    /// 연구책임자
    PrincipalInvestigator,
    /// 지원기관
    FundingAgency,
    /// 지원사업
    FundingProgram,
    /// 소속연구소
    AffiliatedInstitute,
    /// 관리부서
    ManagingDepartment,
    /// 협약연구비
    Budget,
    /// 공동연구원수
    CoResearcherCount,
    /// 연구보조원수
    AssistantResearcherCount,
}

/// Label lookup table, in registry column order.
const LABELS: [(&str, ProjectField); 11] = [
    ("과제번호", ProjectField::ProjectId),
    ("연구기간", ProjectField::Duration),
    ("과 제 명", ProjectField::Title),
    ("연구책임자", ProjectField::PrincipalInvestigator),
    ("지원기관", ProjectField::FundingAgency),
    ("지원사업", ProjectField::FundingProgram),
    ("소속연구소", ProjectField::AffiliatedInstitute),
    ("관리부서", ProjectField::ManagingDepartment),
    ("협약연구비", ProjectField::Budget),
    ("공동연구원수", ProjectField::CoResearcherCount),
    ("연구보조원수", ProjectField::AssistantResearcherCount),
];

/// Column headers of the project registry table.
pub const PROJECT_COLUMNS: [&str; 11] = [
    LABELS[0].0,
    LABELS[1].0,
    LABELS[2].0,
    LABELS[3].0,
    LABELS[4].0,
    LABELS[5].0,
    LABELS[6].0,
    LABELS[7].0,
    LABELS[8].0,
    LABELS[9].0,
    LABELS[10].0,
];

impl ProjectField {
    /// Every field, in registry column order
    pub const ALL: [ProjectField; 11] = [
        ProjectField::ProjectId,
        ProjectField::Duration,
        ProjectField::Title,
        ProjectField::PrincipalInvestigator,
        ProjectField::FundingAgency,
        ProjectField::FundingProgram,
        ProjectField::AffiliatedInstitute,
        ProjectField::ManagingDepartment,
        ProjectField::Budget,
        ProjectField::CoResearcherCount,
        ProjectField::AssistantResearcherCount,
    ];

    /// The label as it appears in source documents
    pub fn label(&self) -> &'static str {
        LABELS
            .iter()
            .find(|(_, field)| field == self)
            .map(|(label, _)| *label)
            .unwrap_or_default()
    }

    /// Look up the field whose label equals `cell` exactly
    ///
    /// # Examples
    ///
    /// ```
    /// use pcert_domain::ProjectField;
    ///
    /// assert_eq!(ProjectField::from_label("과제번호"), Some(ProjectField::ProjectId));
    /// assert_eq!(ProjectField::from_label("과제명"), None);
    /// ```
    pub fn from_label(cell: &str) -> Option<Self> {
        LABELS
            .iter()
            .find(|(label, _)| *label == cell)
            .map(|(_, field)| *field)
    }
}

/// A project as described by one certificate segment.
///
/// Every attribute is present only if the source carried its label. Two records
/// are the same registry row only when every attribute matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProjectRecord {
    /// Project number (과제번호)
    pub project_id: Option<String>,

    /// Research period, kept as written (연구기간)
    pub duration: Option<String>,

    /// Project title (과 제 명)
    pub title: Option<String>,

    /// Principal investigator (연구책임자)
    pub principal_investigator: Option<String>,

    /// Funding agency (지원기관)
    pub funding_agency: Option<String>,

    /// Funding program (지원사업)
    pub funding_program: Option<String>,

    /// Affiliated institute (소속연구소)
    pub affiliated_institute: Option<String>,

    /// Managing department (관리부서)
    pub managing_department: Option<String>,

    /// Contract budget (협약연구비)
    pub budget: Option<String>,

    /// Number of co-researchers (공동연구원수)
    pub co_researcher_count: Option<String>,

    /// Number of assistant researchers (연구보조원수)
    pub assistant_researcher_count: Option<String>,
}

impl ProjectRecord {
    /// Get the value of a field
    pub fn get(&self, field: ProjectField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set the value of a field, replacing any earlier value
    pub fn set(&mut self, field: ProjectField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Whether the record carries a non-empty project number
    ///
    /// Only such records belong in the registry.
    pub fn has_project_id(&self) -> bool {
        self.project_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Cell values in registry column order, absent attributes rendered empty
    pub fn cells(&self) -> Vec<String> {
        ProjectField::ALL
            .iter()
            .map(|field| self.get(*field).unwrap_or_default().to_string())
            .collect()
    }

    fn slot(&self, field: ProjectField) -> &Option<String> {
        match field {
            ProjectField::ProjectId => &self.project_id,
            ProjectField::Duration => &self.duration,
            ProjectField::Title => &self.title,
            ProjectField::PrincipalInvestigator => &self.principal_investigator,
            ProjectField::FundingAgency => &self.funding_agency,
            ProjectField::FundingProgram => &self.funding_program,
            ProjectField::AffiliatedInstitute => &self.affiliated_institute,
            ProjectField::ManagingDepartment => &self.managing_department,
            ProjectField::Budget => &self.budget,
            ProjectField::CoResearcherCount => &self.co_researcher_count,
            ProjectField::AssistantResearcherCount => &self.assistant_researcher_count,
        }
    }

    fn slot_mut(&mut self, field: ProjectField) -> &mut Option<String> {
        match field {
            ProjectField::ProjectId => &mut self.project_id,
            ProjectField::Duration => &mut self.duration,
            ProjectField::Title => &mut self.title,
            ProjectField::PrincipalInvestigator => &mut self.principal_investigator,
            ProjectField::FundingAgency => &mut self.funding_agency,
            ProjectField::FundingProgram => &mut self.funding_program,
            ProjectField::AffiliatedInstitute => &mut self.affiliated_institute,
            ProjectField::ManagingDepartment => &mut self.managing_department,
            ProjectField::Budget => &mut self.budget,
            ProjectField::CoResearcherCount => &mut self.co_researcher_count,
            ProjectField::AssistantResearcherCount => &mut self.assistant_researcher_count,
        }
    }
}
