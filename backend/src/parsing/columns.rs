//! Source column names and their mapping onto semantic fields.
//!
//! Header names are an exact-match contract with the seed spreadsheet export.

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorContext, TimelineError, TimelineResult};

pub const SEED: &str = "Seed";
pub const VARIANT: &str = "Variant";
pub const PLANTING_METHOD: &str = "Planting Method";
/// Source of `start_date`
pub const START_INDOORS: &str = "Start Indoors";
/// Source of `end_date`
pub const TRANSPLANT_SOW: &str = "Transplant / Sow";
pub const SEASON: &str = "Season";
pub const FROST: &str = "Frost";

pub const REQUIRED_COLUMNS: [&str; 5] = [SEED, VARIANT, PLANTING_METHOD, START_INDOORS, TRANSPLANT_SOW];

/// Which optional facet columns the input actually carries.
///
/// A facet whose column is absent imposes no filter constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableFacets {
    pub season: bool,
    pub frost: bool,
}

impl AvailableFacets {
    pub fn all() -> Self {
        Self {
            season: true,
            frost: true,
        }
    }
}

/// Header positions of every known column, keyed by semantic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub seed: usize,
    pub variant: usize,
    pub planting_method: usize,
    pub start_date: usize,
    pub end_date: usize,
    pub season: Option<usize>,
    pub frost: Option<usize>,
}

impl ColumnMap {
    /// Resolve header positions, failing if any required column is absent.
    pub fn from_headers(headers: &StringRecord) -> TimelineResult<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TimelineError::missing_columns(
                missing,
                ErrorContext::new("resolve_columns")
                    .with_details(format!("found headers: {:?}", headers.iter().collect::<Vec<_>>())),
            ));
        }

        // Every required position was just checked.
        let required = |name: &str| position(name).unwrap_or_default();

        Ok(Self {
            seed: required(SEED),
            variant: required(VARIANT),
            planting_method: required(PLANTING_METHOD),
            start_date: required(START_INDOORS),
            end_date: required(TRANSPLANT_SOW),
            season: position(SEASON),
            frost: position(FROST),
        })
    }

    pub fn available_facets(&self) -> AvailableFacets {
        AvailableFacets {
            season: self.season.is_some(),
            frost: self.frost.is_some(),
        }
    }
}
