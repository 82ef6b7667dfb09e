//! Turn mapped raw rows into typed planting records.

use log::debug;

use crate::models::{PlantingMethod, PlantingRecord};
use crate::parsing::csv_parser::RawRow;
use crate::parsing::dates::normalize_optional_date;

/// Join seed and variant into the label used for grouping, filtering and the
/// chart's categorical axis. Missing parts count as empty strings.
pub fn build_display_name(seed: Option<&str>, variant: Option<&str>) -> String {
    format!("{} {}", seed.unwrap_or(""), variant.unwrap_or(""))
        .trim()
        .to_string()
}

/// Normalize dates and derive the display name for one row.
pub fn derive_record(row: RawRow) -> PlantingRecord {
    let start_date = normalize_optional_date(row.start_date.as_deref());
    let end_date = normalize_optional_date(row.end_date.as_deref());

    if row.start_date.is_some() && start_date.is_none() {
        debug!("Unparseable start date {:?} for seed {:?}", row.start_date, row.seed);
    }
    if row.end_date.is_some() && end_date.is_none() {
        debug!("Unparseable end date {:?} for seed {:?}", row.end_date, row.seed);
    }

    let display_name = build_display_name(row.seed.as_deref(), row.variant.as_deref());
    let planting_method = PlantingMethod::parse(row.planting_method.as_deref().unwrap_or(""));

    PlantingRecord {
        seed_name: row.seed.unwrap_or_default(),
        variant: row.variant,
        planting_method,
        start_date,
        end_date,
        season: row.season,
        frost: row.frost,
        display_name,
    }
}

pub fn derive_records(rows: Vec<RawRow>) -> Vec<PlantingRecord> {
    rows.into_iter().map(derive_record).collect()
}
