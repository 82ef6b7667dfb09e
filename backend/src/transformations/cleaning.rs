use log::debug;

use crate::config::MissingDatePolicy;
use crate::models::PlantingRecord;

/// Apply the configured policy for records that still lack a start or end date.
///
/// Runs after direct-sow adjustment, so a direct-sow row with a sow date is
/// never dropped for its blank start cell.
pub fn apply_missing_date_policy(
    records: Vec<PlantingRecord>,
    policy: MissingDatePolicy,
) -> Vec<PlantingRecord> {
    match policy {
        MissingDatePolicy::Retain => records,
        MissingDatePolicy::Drop => {
            let before = records.len();
            let kept: Vec<PlantingRecord> = records
                .into_iter()
                .filter(|r| !r.has_missing_dates())
                .collect();
            if kept.len() < before {
                debug!("Dropped {} rows with missing dates", before - kept.len());
            }
            kept
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantingMethod;
    use chrono::NaiveDate;

    fn record(name: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> PlantingRecord {
        PlantingRecord {
            seed_name: name.to_string(),
            variant: None,
            planting_method: PlantingMethod::StartIndoors,
            start_date: start,
            end_date: end,
            season: None,
            frost: None,
            display_name: name.to_string(),
        }
    }

    fn sample() -> Vec<PlantingRecord> {
        let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day);
        vec![
            record("Complete", d(2, 1), d(4, 1)),
            record("NoStart", None, d(4, 1)),
            record("NoEnd", d(2, 1), None),
        ]
    }

    #[test]
    fn test_retain_keeps_everything() {
        assert_eq!(apply_missing_date_policy(sample(), MissingDatePolicy::Retain).len(), 3);
    }

    #[test]
    fn test_drop_removes_incomplete_rows() {
        let kept = apply_missing_date_policy(sample(), MissingDatePolicy::Drop);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].display_name, "Complete");
    }
}
