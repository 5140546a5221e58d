//! Project-info block parsing

use pcert_domain::{ProjectField, ProjectRecord};

/// Parse a project-info block into a record
///
/// Each line is split into tab cells. A cell that exactly equals a known label
/// (after trimming) takes the next cell, trimmed, as that field's value. Rows
/// may hold several label/value pairs, and a later occurrence of a label
/// replaces an earlier one.
pub(crate) fn parse_project_block(block: &str) -> ProjectRecord {
    let mut record = ProjectRecord::default();

    for line in block.trim().lines() {
        let cells: Vec<&str> = line.split('\t').collect();
        for (idx, cell) in cells.iter().enumerate() {
            let Some(field) = ProjectField::from_label(cell.trim()) else {
                continue;
            };
            if let Some(value) = cells.get(idx + 1) {
                record.set(field, value.trim());
            }
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_followed_by_value() {
        let record = parse_project_block("과제번호\tP001");
        assert_eq!(record.project_id.as_deref(), Some("P001"));
    }

    #[test]
    fn test_several_pairs_per_row() {
        let block = "\n과제번호\t P001 \t연구기간\t2024-01-01 ~ 2024-12-31\n\
                     과 제 명\tAI Research\n\
                     연구책임자\tLee\t\t지원기관\tAgency A\t지원사업\tBasic\n";
        let record = parse_project_block(block);

        assert_eq!(record.project_id.as_deref(), Some("P001"));
        assert_eq!(record.duration.as_deref(), Some("2024-01-01 ~ 2024-12-31"));
        assert_eq!(record.title.as_deref(), Some("AI Research"));
        assert_eq!(record.principal_investigator.as_deref(), Some("Lee"));
        assert_eq!(record.funding_agency.as_deref(), Some("Agency A"));
        assert_eq!(record.funding_program.as_deref(), Some("Basic"));
        assert_eq!(record.budget, None);
    }

    #[test]
    fn test_label_in_last_cell_has_no_value() {
        let record = parse_project_block("과제번호\tP001\t관리부서");
        assert_eq!(record.managing_department, None);
    }

    #[test]
    fn test_label_with_empty_value_is_present_but_empty() {
        let record = parse_project_block("협약연구비\t\t과제번호\tP001");
        assert_eq!(record.budget.as_deref(), Some(""));
    }

    #[test]
    fn test_padded_label_cell_matches() {
        let record = parse_project_block("  과제번호  \tP001");
        assert_eq!(record.project_id.as_deref(), Some("P001"));
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let record = parse_project_block("과제명\tNope\n비고\tSomething");
        assert_eq!(record, ProjectRecord::default());
    }

    #[test]
    fn test_missing_project_id() {
        let record = parse_project_block("지원기관\tAgency A");
        assert!(!record.has_project_id());
        assert_eq!(record.funding_agency.as_deref(), Some("Agency A"));
    }

    #[test]
    fn test_later_occurrence_wins() {
        let record = parse_project_block("공동연구원수\t3\n공동연구원수\t4");
        assert_eq!(record.co_researcher_count.as_deref(), Some("4"));
    }
}
