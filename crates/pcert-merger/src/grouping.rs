//! Grouping of participation rows before merging

use crate::error::MergeError;
use crate::merge::merge_periods;
use pcert_domain::ParticipationRow;
use std::collections::BTreeMap;
use tracing::debug;

/// Every field of a [`ParticipationRow`] except the participation period
///
/// Rows with equal keys describe the same role in the same project and only
/// differ in when it was held. Absent funding agencies compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    /// Project number
    pub project_id: String,
    /// Project title
    pub project_title: String,
    /// Joined funding agency
    pub funding_agency: Option<String>,
    /// Person name
    pub person_name: String,
    /// National ID
    pub national_id: String,
    /// Researcher type
    pub researcher_type: String,
    /// Track type
    pub track_type: String,
    /// Affiliation
    pub affiliation: String,
}

impl GroupKey {
    /// The key of a row
    pub fn of(row: &ParticipationRow) -> Self {
        let r = &row.record;
        Self {
            project_id: r.project_id.clone(),
            project_title: r.project_title.clone(),
            funding_agency: row.funding_agency.clone(),
            person_name: r.person_name.clone(),
            national_id: r.national_id.clone(),
            researcher_type: r.researcher_type.clone(),
            track_type: r.track_type.clone(),
            affiliation: r.affiliation.clone(),
        }
    }
}

/// Merge the periods of rows that share a [`GroupKey`]
///
/// Emits one row per merged period, copying every other field from the first
/// row of its group. Groups come out in ascending key order, and periods in
/// ascending date order within a group.
pub fn merge_rows(rows: &[ParticipationRow]) -> Result<Vec<ParticipationRow>, MergeError> {
    let mut groups: BTreeMap<GroupKey, Vec<&ParticipationRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(GroupKey::of(row)).or_default().push(row);
    }

    let mut merged = Vec::with_capacity(rows.len());
    for (key, members) in &groups {
        let periods: Vec<&str> = members
            .iter()
            .map(|row| row.record.participation_period.as_str())
            .collect();
        let merged_periods = merge_periods(&periods)?;

        debug!(
            "Merged {} period(s) into {} for {} / {}",
            periods.len(),
            merged_periods.len(),
            key.person_name,
            key.project_id
        );

        let representative = members[0];
        merged.extend(
            merged_periods
                .into_iter()
                .map(|period| representative.with_period(period)),
        );
    }

    Ok(merged)
}
