//! Table, sheet and output file naming

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Longest worksheet name a spreadsheet accepts
pub const MAX_SHEET_NAME_CHARS: usize = 31;

const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const FORBIDDEN_FILE_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
pub(crate) const MAX_FILE_STEM_CHARS: usize = 120;

/// Names given to the output tables and files
///
/// # Examples
///
/// ```
/// use pcert_report::SheetNaming;
///
/// let naming = SheetNaming::default();
/// assert_eq!(naming.registry_sheet, "과제정보");
/// assert_eq!(naming.merged_sheet("김철수"), "김철수(통합)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNaming {
    /// Name of the project registry table
    pub registry_sheet: String,

    /// Appended to a person's name for their merged table
    pub merged_suffix: String,

    /// Prefix of the timestamped output file
    pub output_prefix: String,
}

impl Default for SheetNaming {
    fn default() -> Self {
        Self {
            registry_sheet: "과제정보".to_string(),
            merged_suffix: "(통합)".to_string(),
            output_prefix: "연구과제_참여이력_통합".to_string(),
        }
    }
}

impl SheetNaming {
    /// Name of a person's plain table
    pub fn person_sheet(&self, person_name: &str) -> String {
        person_name.to_string()
    }

    /// Name of a person's merged table
    pub fn merged_sheet(&self, person_name: &str) -> String {
        format!("{}{}", person_name, self.merged_suffix)
    }
}

/// Timestamped output name, e.g. `연구과제_참여이력_통합_20250102_0930.xlsx`
///
/// `now` is supplied by the caller; an empty `extension` yields a bare name
/// (used for CSV output directories).
pub fn output_file_name(prefix: &str, now: NaiveDateTime, extension: &str) -> String {
    let stamp = now.format("%Y%m%d_%H%M");
    if extension.is_empty() {
        format!("{}_{}", prefix, stamp)
    } else {
        format!("{}_{}.{}", prefix, stamp, extension)
    }
}

/// Make a name acceptable as a worksheet name
///
/// Forbidden characters become `_`, surrounding apostrophes and whitespace are
/// dropped and the result is cut to [`MAX_SHEET_NAME_CHARS`]. An empty result
/// becomes `fallback`.
pub fn sanitize_sheet_name(name: &str, fallback: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if FORBIDDEN_SHEET_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim().trim_matches('\'').trim();
    let mut sheet = truncate_name(trimmed, MAX_SHEET_NAME_CHARS);

    if sheet.is_empty() {
        sheet = truncate_name(fallback, MAX_SHEET_NAME_CHARS);
    }
    // Reserved by spreadsheet applications.
    if sheet.eq_ignore_ascii_case("history") {
        sheet.push('_');
    }
    sheet
}

/// Cut to `max_chars`; a cut may expose an apostrophe or space, which is dropped
fn truncate_name(name: &str, max_chars: usize) -> String {
    let cut: String = name.chars().take(max_chars).collect();
    cut.trim_end_matches(|c: char| c == '\'' || c.is_whitespace())
        .to_string()
}

/// Make a name acceptable as a file stem on common filesystems
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if FORBIDDEN_FILE_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = replaced.trim().trim_end_matches('.').trim();
    let stem: String = trimmed.chars().take(MAX_FILE_STEM_CHARS).collect();

    if stem.is_empty() {
        fallback.to_string()
    } else {
        stem
    }
}

/// Hands out names that are unique ignoring case
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    /// Claim `base`, or `base (2)`, `base (3)`, ... cut to `max_chars`
    pub fn claim(&mut self, base: &str, max_chars: usize) -> String {
        let mut candidate = truncate_name(base, max_chars);
        let mut counter = 2;
        while !self.used.insert(candidate.to_lowercase()) {
            let suffix = format!(" ({})", counter);
            let room = max_chars.saturating_sub(suffix.chars().count());
            candidate = truncate_name(base, room) + &suffix;
            counter += 1;
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_output_file_name_uses_injected_time() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(9, 30, 59)
            .unwrap();

        assert_eq!(
            output_file_name("연구과제_참여이력_통합", now, "xlsx"),
            "연구과제_참여이력_통합_20250102_0930.xlsx"
        );
        assert_eq!(output_file_name("report", now, ""), "report_20250102_0930");
    }

    #[test]
    fn test_sheet_name_replaces_forbidden_chars() {
        assert_eq!(sanitize_sheet_name("a/b:c[d]", "x"), "a_b_c_d_");
    }

    #[test]
    fn test_sheet_name_is_truncated_by_chars() {
        let long = "가".repeat(40);
        let sheet = sanitize_sheet_name(&long, "x");
        assert_eq!(sheet.chars().count(), MAX_SHEET_NAME_CHARS);
    }

    #[test]
    fn test_sheet_name_fallback_and_apostrophes() {
        assert_eq!(sanitize_sheet_name("  ", "성명없음"), "성명없음");
        assert_eq!(sanitize_sheet_name("'Kim'", "x"), "Kim");
        assert_eq!(sanitize_sheet_name("History", "x"), "History_");
    }

    #[test]
    fn test_sheet_name_cut_never_ends_with_apostrophe() {
        let name = format!("{}'(통합)", "a".repeat(30));
        let sheet = sanitize_sheet_name(&name, "x");

        assert_eq!(sheet, "a".repeat(30));

        let spaced = format!("{} '(통합)", "a".repeat(29));
        assert_eq!(sanitize_sheet_name(&spaced, "x"), "a".repeat(29));
    }

    #[test]
    fn test_unique_suffix_never_follows_an_apostrophe() {
        let mut names = UniqueNames::default();
        let base = format!("{}'bcd", "a".repeat(26));

        assert_eq!(names.claim(&base, 31), base);
        assert_eq!(names.claim(&base, 31), format!("{} (2)", "a".repeat(26)));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(sanitize_file_stem("a/b\\c?", "x"), "a_b_c_");
        assert_eq!(sanitize_file_stem("name.", "x"), "name");
        assert_eq!(sanitize_file_stem("", "x"), "x");
    }

    #[test]
    fn test_unique_names_ignore_case() {
        let mut names = UniqueNames::default();
        assert_eq!(names.claim("Kim", 31), "Kim");
        assert_eq!(names.claim("kim", 31), "kim (2)");
        assert_eq!(names.claim("Kim", 31), "Kim (3)");
    }

    #[test]
    fn test_unique_names_respect_length() {
        let mut names = UniqueNames::default();
        let base = "가".repeat(31);
        let first = names.claim(&base, 31);
        let second = names.claim(&base, 31);

        assert_eq!(first.chars().count(), 31);
        assert_eq!(second.chars().count(), 31);
        assert!(second.ends_with(" (2)"));
    }

    #[test]
    fn test_merged_sheet_name() {
        let naming = SheetNaming {
            merged_suffix: "_기간통합".to_string(),
            ..SheetNaming::default()
        };
        assert_eq!(naming.merged_sheet("Kim"), "Kim_기간통합");
        assert_eq!(naming.person_sheet("Kim"), "Kim");
    }
}
