//! Consolidation of records from many documents

use crate::error::ReportError;
use crate::naming::SheetNaming;
use crate::table::Table;
use pcert_domain::{
    ParticipationRow, ProjectRecord, ResearcherRecord, PARTICIPATION_COLUMNS, PROJECT_COLUMNS,
};
use pcert_merger::merge_rows;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Everything needed to write a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consolidated {
    /// Distinct project rows, first-seen order
    pub registry: Vec<ProjectRecord>,

    /// One entry per distinct person name, first-seen order
    pub people: Vec<PersonSheets>,
}

/// The rows of one person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSheets {
    /// Person name shared by every row
    pub person_name: String,

    /// Participation rows in document order
    pub rows: Vec<ParticipationRow>,

    /// The same rows with contiguous periods merged
    pub merged_rows: Vec<ParticipationRow>,
}

/// Build the registry, join funding agencies, split by person and merge periods
///
/// `projects` and `researchers` are the concatenated extraction output of every
/// document, in document order.
pub fn consolidate(
    projects: &[ProjectRecord],
    researchers: &[ResearcherRecord],
) -> Result<Consolidated, ReportError> {
    let registry = dedup_registry(projects);
    let joined = join_funding_agency(&registry, researchers);

    let mut order: Vec<String> = Vec::new();
    let mut by_person: HashMap<String, Vec<ParticipationRow>> = HashMap::new();
    for row in joined {
        let name = row.record.person_name.clone();
        match by_person.entry(name) {
            Entry::Occupied(mut entry) => entry.get_mut().push(row),
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(vec![row]);
            }
        }
    }

    let mut people = Vec::with_capacity(order.len());
    for person_name in order {
        let rows = by_person.remove(&person_name).unwrap_or_default();
        let merged_rows = merge_rows(&rows).map_err(|source| ReportError::Merge {
            person: person_name.clone(),
            source,
        })?;
        debug!(
            "{}: {} row(s), {} after merging",
            person_name,
            rows.len(),
            merged_rows.len()
        );
        people.push(PersonSheets {
            person_name,
            rows,
            merged_rows,
        });
    }

    info!(
        "Consolidated {} project(s) and {} researcher row(s) for {} person(s)",
        registry.len(),
        researchers.len(),
        people.len()
    );

    Ok(Consolidated { registry, people })
}

/// Drop repeated project rows, keeping the first occurrence of each
///
/// Rows are equal only when every attribute is equal; two rows sharing a
/// project number but differing elsewhere are both kept.
pub fn dedup_registry(projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
    let mut seen: HashSet<&ProjectRecord> = HashSet::new();
    projects
        .iter()
        .filter(|project| seen.insert(*project))
        .cloned()
        .collect()
}

/// Attach each researcher record's funding agency from the registry
///
/// The first registry row with a matching project number decides. Records with
/// no matching project get `None`.
pub fn join_funding_agency(
    registry: &[ProjectRecord],
    researchers: &[ResearcherRecord],
) -> Vec<ParticipationRow> {
    let mut agencies: HashMap<&str, Option<&str>> = HashMap::new();
    for project in registry {
        let Some(project_id) = project.project_id.as_deref() else {
            continue;
        };
        let agency = project.funding_agency.as_deref();
        match agencies.entry(project_id) {
            Entry::Vacant(entry) => {
                entry.insert(agency);
            }
            Entry::Occupied(entry) => {
                if *entry.get() != agency {
                    warn!(
                        "Project {} lists conflicting funding agencies; keeping {:?}",
                        project_id,
                        entry.get()
                    );
                }
            }
        }
    }

    researchers
        .iter()
        .map(|record| {
            let agency = agencies
                .get(record.project_id.as_str())
                .copied()
                .flatten()
                .map(str::to_string);
            ParticipationRow::new(record.clone(), agency)
        })
        .collect()
}

impl Consolidated {
    /// Look up a person's rows by name
    pub fn person(&self, person_name: &str) -> Option<&PersonSheets> {
        self.people.iter().find(|p| p.person_name == person_name)
    }

    /// Every participation row, person by person
    pub fn all_rows(&self) -> impl Iterator<Item = &ParticipationRow> {
        self.people.iter().flat_map(|p| p.rows.iter())
    }

    /// Every merged participation row, person by person
    pub fn all_merged_rows(&self) -> impl Iterator<Item = &ParticipationRow> {
        self.people.iter().flat_map(|p| p.merged_rows.iter())
    }

    /// The project registry table
    pub fn registry_table(&self, naming: &SheetNaming) -> Table {
        let mut table = Table::new(naming.registry_sheet.as_str(), &PROJECT_COLUMNS);
        for project in &self.registry {
            table.push_row(project.cells());
        }
        table
    }

    /// Every output table: the registry, then each person's plain and merged tables
    pub fn tables(&self, naming: &SheetNaming) -> Vec<Table> {
        let mut tables = Vec::with_capacity(1 + 2 * self.people.len());
        tables.push(self.registry_table(naming));
        for person in &self.people {
            tables.push(participation_table(
                naming.person_sheet(&person.person_name),
                &person.rows,
            ));
            tables.push(participation_table(
                naming.merged_sheet(&person.person_name),
                &person.merged_rows,
            ));
        }
        tables
    }
}

fn participation_table(name: String, rows: &[ParticipationRow]) -> Table {
    let mut table = Table::new(name, &PARTICIPATION_COLUMNS);
    for row in rows {
        table.push_row(row.cells());
    }
    table
}
