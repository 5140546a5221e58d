//! Adjacency merge of date ranges

use crate::error::MergeError;
use crate::period::DateRange;

/// Merge ranges that follow each other day by day
///
/// Ranges are sorted by `(start, end)` and folded left to right. Ties on the
/// start date are broken by the end date so the result never depends on input
/// order, which a stable sort on the start alone would. The open
/// range is extended when the next range starts exactly one day after it ends;
/// any other next range (gap or overlap) closes it and opens a new one.
pub fn merge_ranges(mut ranges: Vec<DateRange>) -> Vec<DateRange> {
    ranges.sort();

    let mut merged: Vec<DateRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(open) if open.is_followed_by(&range) => open.end = range.end,
            _ => merged.push(range),
        }
    }
    merged
}

/// Parse, merge and format participation periods
///
/// Every period must be `"<start> ~ <end>"` with ISO dates; the first one that
/// is not fails the whole call.
pub fn merge_periods<S: AsRef<str>>(periods: &[S]) -> Result<Vec<String>, MergeError> {
    let ranges = periods
        .iter()
        .map(|period| period.as_ref().parse::<DateRange>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(merge_ranges(ranges).iter().map(ToString::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_start_dates_merge_the_same_in_any_order() {
        let forward = merge_periods(&[
            "2024-01-01 ~ 2024-01-10",
            "2024-01-01 ~ 2024-01-05",
            "2024-01-11 ~ 2024-01-20",
        ])
        .unwrap();
        let backward = merge_periods(&[
            "2024-01-11 ~ 2024-01-20",
            "2024-01-01 ~ 2024-01-05",
            "2024-01-01 ~ 2024-01-10",
        ])
        .unwrap();

        assert_eq!(forward, vec!["2024-01-01 ~ 2024-01-05", "2024-01-01 ~ 2024-01-20"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_adjacent_periods_merge() {
        let merged = merge_periods(&["2024-01-01 ~ 2024-01-10", "2024-01-11 ~ 2024-01-20"]).unwrap();
        assert_eq!(merged, vec!["2024-01-01 ~ 2024-01-20"]);
    }

    #[test]
    fn test_gap_of_one_day_stays_split() {
        let merged = merge_periods(&["2024-01-01 ~ 2024-01-10", "2024-01-12 ~ 2024-01-20"]).unwrap();
        assert_eq!(merged, vec!["2024-01-01 ~ 2024-01-10", "2024-01-12 ~ 2024-01-20"]);
    }

    #[test]
    fn test_overlap_stays_split() {
        let merged = merge_periods(&["2024-01-01 ~ 2024-01-10", "2024-01-05 ~ 2024-01-20"]).unwrap();
        assert_eq!(merged, vec!["2024-01-01 ~ 2024-01-10", "2024-01-05 ~ 2024-01-20"]);

        let touching = merge_periods(&["2024-01-01 ~ 2024-01-10", "2024-01-10 ~ 2024-01-20"]).unwrap();
        assert_eq!(touching.len(), 2);
    }

    #[test]
    fn test_chain_of_periods() {
        let merged = merge_periods(&[
            "2024-03-01 ~ 2024-03-31",
            "2024-01-01 ~ 2024-01-31",
            "2024-02-01 ~ 2024-02-29",
            "2024-05-01 ~ 2024-05-31",
        ])
        .unwrap();
        assert_eq!(merged, vec!["2024-01-01 ~ 2024-03-31", "2024-05-01 ~ 2024-05-31"]);
    }

    #[test]
    fn test_single_and_empty_input() {
        let single = merge_periods(&["2024-01-01~2024-01-10"]).unwrap();
        assert_eq!(single, vec!["2024-01-01 ~ 2024-01-10"]);

        let none: Vec<String> = merge_periods::<&str>(&[]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_duplicate_periods_are_kept() {
        let merged = merge_periods(&["2024-01-01 ~ 2024-01-10", "2024-01-01 ~ 2024-01-10"]).unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_format_error_is_surfaced() {
        let result = merge_periods(&["2024-01-01 ~ 2024-01-10", "2024-01-11 - 2024-01-20"]);
        assert!(matches!(result, Err(MergeError::Format { .. })));
    }
}
