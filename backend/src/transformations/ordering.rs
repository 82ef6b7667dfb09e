//! Categorical-axis ordering for the timeline chart.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::PlantingRecord;

/// Order the distinct display names by their earliest start date.
///
/// Each name appears exactly once. Groups are sorted ascending by the minimum
/// non-null `start_date`; groups with no start date at all come last. Ties
/// keep the order in which the name first appears in `records`.
pub fn display_order(records: &[PlantingRecord]) -> Vec<String> {
    // (first appearance, earliest start)
    let mut groups: HashMap<&str, (usize, Option<NaiveDate>)> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let entry = groups
            .entry(record.display_name.as_str())
            .or_insert((index, None));
        entry.1 = match (entry.1, record.start_date) {
            (Some(current), Some(start)) => Some(current.min(start)),
            (current, start) => current.or(start),
        };
    }

    let mut ordered: Vec<(&str, usize, Option<NaiveDate>)> = groups
        .into_iter()
        .map(|(name, (first_seen, min_start))| (name, first_seen, min_start))
        .collect();

    // None sorts after every date; first appearance breaks ties.
    ordered.sort_by_key(|(_, first_seen, min_start)| (min_start.is_none(), *min_start, *first_seen));

    ordered
        .into_iter()
        .map(|(name, _, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantingMethod;

    fn d(m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, m, day)
    }

    fn record(name: &str, start: Option<NaiveDate>) -> PlantingRecord {
        PlantingRecord {
            seed_name: name.to_string(),
            variant: None,
            planting_method: PlantingMethod::StartIndoors,
            start_date: start,
            end_date: None,
            season: None,
            frost: None,
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(display_order(&[]).is_empty());
    }

    #[test]
    fn test_group_uses_minimum_start() {
        let records = vec![
            record("Basil", d(3, 1)),
            record("Tomato", d(2, 15)),
            record("Basil", d(2, 1)),
        ];
        assert_eq!(display_order(&records), vec!["Basil", "Tomato"]);
    }

    #[test]
    fn test_undated_groups_sort_last_in_appearance_order() {
        let records = vec![
            record("Garlic", None),
            record("Pea", d(4, 1)),
            record("Onion", None),
            record("Leek", d(1, 20)),
        ];
        assert_eq!(display_order(&records), vec!["Leek", "Pea", "Garlic", "Onion"]);
    }

    #[test]
    fn test_null_start_ignored_in_minimum() {
        let records = vec![record("Kale", None), record("Kale", d(5, 1)), record("Chard", d(4, 1))];
        assert_eq!(display_order(&records), vec!["Chard", "Kale"]);
    }

    #[test]
    fn test_equal_minimum_keeps_first_appearance() {
        let records = vec![record("Zinnia", d(3, 1)), record("Aster", d(3, 1))];
        assert_eq!(display_order(&records), vec!["Zinnia", "Aster"]);
    }
}
