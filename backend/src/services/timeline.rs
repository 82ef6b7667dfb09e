//! Timeline service: runs the full transform pipeline for one request.
//!
//! `load -> normalize -> derive -> adjust -> filter -> order`, re-executed from
//! scratch every time; nothing is cached between runs.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::error::TimelineResult;
use crate::models::{PlantingRecord, SeasonWindow};
use crate::parsing::{self, AvailableFacets, RawTable};
use crate::transformations::{
    adjust_direct_sow, apply_missing_date_policy, derive_records, display_order, facet_options,
    filter_records, split_stages, FacetOptions, FacetSelection, StageEvent,
};

/// Records after derivation and adjustment, before any user filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedSchedule {
    pub records: Vec<PlantingRecord>,
    pub facets: AvailableFacets,
}

/// One horizontal bar, clipped to the growing-season window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBar {
    pub display_name: String,
    /// Colour key
    pub planting_method: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Everything the rendering layer needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    /// Filtered records in input order
    pub records: Vec<PlantingRecord>,
    /// Categorical axis order, unique display names
    pub display_order: Vec<String>,
    pub bars: Vec<TimelineBar>,
    pub season_window: SeasonWindow,
    /// Present only when stage split is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_events: Option<Vec<StageEvent>>,
    /// Widget options computed over the unfiltered records
    pub facet_options: FacetOptions,
    pub available_facets: AvailableFacets,
    pub total_count: usize,
    pub filtered_count: usize,
}

/// Derive, adjust and clean the raw rows of one file.
pub fn prepare_records(table: RawTable, config: &PipelineConfig) -> PreparedSchedule {
    let records = derive_records(table.rows);
    let records = adjust_direct_sow(records, config.date_adjust_days);
    let records = apply_missing_date_policy(records, config.missing_date_policy);

    PreparedSchedule {
        records,
        facets: table.facets,
    }
}

/// Bars for every record whose span intersects the season window.
pub fn timeline_bars(records: &[PlantingRecord], window: &SeasonWindow) -> Vec<TimelineBar> {
    records
        .iter()
        .filter_map(|record| {
            window
                .clip(record.start_date, record.end_date)
                .map(|(start_date, end_date)| TimelineBar {
                    display_name: record.display_name.clone(),
                    planting_method: record.planting_method.label().to_string(),
                    start_date,
                    end_date,
                })
        })
        .collect()
}

/// Filter and order a prepared schedule into chart-ready data.
pub fn compute_timeline_data(
    prepared: &PreparedSchedule,
    selection: &FacetSelection,
    config: &PipelineConfig,
) -> TimelineData {
    let filtered = filter_records(&prepared.records, selection, prepared.facets);
    let order = display_order(&filtered);
    let window = config.season_window();
    let bars = timeline_bars(&filtered, &window);
    let stage_events = config
        .include_stage_split
        .then(|| split_stages(&filtered));

    debug!(
        "Timeline: {} of {} records after filtering, {} bars",
        filtered.len(),
        prepared.records.len(),
        bars.len()
    );

    TimelineData {
        total_count: prepared.records.len(),
        filtered_count: filtered.len(),
        display_order: order,
        bars,
        season_window: window,
        stage_events,
        facet_options: facet_options(&prepared.records, prepared.facets),
        available_facets: prepared.facets,
        records: filtered,
    }
}

/// Run the whole pipeline against a file on disk.
pub fn build_timeline(
    csv_path: &Path,
    selection: &FacetSelection,
    config: &PipelineConfig,
) -> TimelineResult<TimelineData> {
    let table = parsing::load_rows(csv_path)?;
    let prepared = prepare_records(table, config);
    Ok(compute_timeline_data(&prepared, selection, config))
}

/// Run the whole pipeline against any reader.
pub fn build_timeline_from_reader<R: Read>(
    reader: R,
    selection: &FacetSelection,
    config: &PipelineConfig,
) -> TimelineResult<TimelineData> {
    let table = parsing::read_rows(reader)?;
    let prepared = prepare_records(table, config);
    Ok(compute_timeline_data(&prepared, selection, config))
}

/// Facet options only, for populating widgets before any selection is made.
pub fn load_facet_options(
    csv_path: &Path,
    config: &PipelineConfig,
) -> TimelineResult<FacetOptions> {
    let prepared = prepare_records(parsing::load_rows(csv_path)?, config);
    Ok(facet_options(&prepared.records, prepared.facets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissingDatePolicy;
    use crate::transformations::{Facet, Stage};

    const CSV: &str = "\
Seed,Variant,Planting Method,Start Indoors,Transplant / Sow,Season,Frost
Tomato,Roma,Direct Sow,,2025-05-01,Spring,After
Basil,,Start Indoors,2025-03-01,2025-05-15,Spring,After
Basil,,Start Indoors,2025-02-01,2025-04-15,Spring,After
Garlic,Music,Direct Sow,,2025-10-20,Fall,Before
Leek,,Start Indoors,TBD,2025-04-01,Spring,Before
";

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn run(selection: &FacetSelection, config: &PipelineConfig) -> TimelineData {
        build_timeline_from_reader(CSV.as_bytes(), selection, config).unwrap()
    }

    #[test]
    fn test_full_pipeline_defaults() {
        let data = run(&FacetSelection::default(), &PipelineConfig::default());

        assert_eq!(data.total_count, 5);
        assert_eq!(data.filtered_count, 5);
        assert_eq!(data.records[0].display_name, "Tomato Roma");
        assert_eq!(data.records[0].start_date, Some(d(2025, 4, 28)));
        assert_eq!(
            data.display_order,
            vec!["Basil", "Tomato Roma", "Garlic Music", "Leek"]
        );
        assert!(data.stage_events.is_none());
        assert_eq!(data.available_facets, AvailableFacets::all());
    }

    #[test]
    fn test_bars_skip_undated_records() {
        let data = run(&FacetSelection::default(), &PipelineConfig::default());
        assert_eq!(data.bars.len(), 4);
        assert!(data.bars.iter().all(|b| b.display_name != "Leek"));
        assert_eq!(data.bars[0].planting_method, "Direct Sow");
    }

    #[test]
    fn test_season_end_clips_bars() {
        let config = PipelineConfig {
            season_end: d(2025, 10, 13),
            ..PipelineConfig::default()
        };
        let data = run(&FacetSelection::default(), &config);
        assert!(data.bars.iter().all(|b| b.end_date <= d(2025, 10, 13)));
        assert!(data.bars.iter().all(|b| b.display_name != "Garlic Music"));
    }

    #[test]
    fn test_selection_filters_but_options_stay_complete() {
        let selection = FacetSelection::default().with(Facet::Season, ["Fall"]);
        let data = run(&selection, &PipelineConfig::default());

        assert_eq!(data.filtered_count, 1);
        assert_eq!(data.display_order, vec!["Garlic Music"]);
        assert_eq!(data.facet_options.season, vec!["Fall", "Spring"]);
    }

    #[test]
    fn test_drop_policy_removes_unparseable_rows() {
        let config = PipelineConfig {
            missing_date_policy: MissingDatePolicy::Drop,
            ..PipelineConfig::default()
        };
        let data = run(&FacetSelection::default(), &config);
        assert_eq!(data.total_count, 4);
        assert!(!data.display_order.contains(&"Leek".to_string()));
        // Direct-sow rows have blank start cells but survive after back-dating.
        assert!(data.display_order.contains(&"Tomato Roma".to_string()));
    }

    #[test]
    fn test_stage_split() {
        let config = PipelineConfig {
            include_stage_split: true,
            ..PipelineConfig::default()
        };
        let data = run(&FacetSelection::default(), &config);
        let events = data.stage_events.unwrap();
        // 4 records with both dates, Leek only has a transplant date.
        assert_eq!(events.len(), 9);
        assert_eq!(events[0].stage, Stage::StartIndoors);
        assert_eq!(events[0].date, d(2025, 4, 28));
    }

    #[test]
    fn test_selection_matching_nothing() {
        let selection = FacetSelection::default().with(Facet::DisplayName, ["Okra"]);
        let data = run(&selection, &PipelineConfig::default());
        assert!(data.records.is_empty());
        assert!(data.display_order.is_empty());
        assert!(data.bars.is_empty());
    }
}
