//! Long-form stage view: one event per record per known date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::PlantingRecord;
use crate::parsing::columns::{START_INDOORS, TRANSPLANT_SOW};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Start Indoors")]
    StartIndoors,
    #[serde(rename = "Transplant / Sow")]
    TransplantSow,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::StartIndoors => START_INDOORS,
            Stage::TransplantSow => TRANSPLANT_SOW,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dated milestone for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEvent {
    pub display_name: String,
    pub stage: Stage,
    pub date: NaiveDate,
}

/// Split each record into its start and transplant/sow events, skipping
/// missing dates. Output follows record order, start before end.
pub fn split_stages(records: &[PlantingRecord]) -> Vec<StageEvent> {
    records
        .iter()
        .flat_map(|record| {
            [
                (Stage::StartIndoors, record.start_date),
                (Stage::TransplantSow, record.end_date),
            ]
            .into_iter()
            .filter_map(move |(stage, date)| {
                date.map(|date| StageEvent {
                    display_name: record.display_name.clone(),
                    stage,
                    date,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantingMethod;

    #[test]
    fn test_split_skips_missing_dates() {
        let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day);
        let records = vec![
            PlantingRecord {
                seed_name: "Tomato".to_string(),
                variant: Some("Roma".to_string()),
                planting_method: PlantingMethod::StartIndoors,
                start_date: d(3, 1),
                end_date: d(5, 10),
                season: None,
                frost: None,
                display_name: "Tomato Roma".to_string(),
            },
            PlantingRecord {
                seed_name: "Pea".to_string(),
                variant: None,
                planting_method: PlantingMethod::DirectSow,
                start_date: None,
                end_date: d(4, 1),
                season: None,
                frost: None,
                display_name: "Pea".to_string(),
            },
        ];

        let events = split_stages(&records);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].stage, Stage::StartIndoors);
        assert_eq!(events[1].stage, Stage::TransplantSow);
        assert_eq!(events[2].display_name, "Pea");
        assert_eq!(events[2].stage, Stage::TransplantSow);
    }

    #[test]
    fn test_stage_serializes_as_column_label() {
        let json = serde_json::to_string(&Stage::TransplantSow).unwrap();
        assert_eq!(json, "\"Transplant / Sow\"");
    }
}
