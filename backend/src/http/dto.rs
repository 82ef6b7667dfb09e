//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::transformations::{Facet, FacetSelection};

pub use crate::services::{TimelineBar, TimelineData};
pub use crate::transformations::FacetOptions;

/// Query parameters for the timeline endpoint.
///
/// Each facet key may repeat, one selected value per occurrence
/// (`?season=Spring&season=Fall`). Values are matched verbatim, so display
/// names containing commas stay selectable. An absent facet selects everything.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimelineQuery {
    #[serde(default)]
    pub season: Vec<String>,
    #[serde(default)]
    pub frost: Vec<String>,
    /// Planting method labels, e.g. `Direct Sow`
    #[serde(default)]
    pub method: Vec<String>,
    /// Display names
    #[serde(default)]
    pub seed: Vec<String>,
    /// Overrides the configured stage split (`true` / `false`)
    #[serde(default)]
    pub stage_split: Option<String>,
}

impl TimelineQuery {
    pub fn selection(&self) -> FacetSelection {
        [
            (Facet::Season, &self.season),
            (Facet::Frost, &self.frost),
            (Facet::PlantingMethod, &self.method),
            (Facet::DisplayName, &self.seed),
        ]
        .into_iter()
        .fold(FacetSelection::default(), |selection, (facet, values)| {
            selection.with(facet, non_blank(values))
        })
    }

    pub fn stage_split(&self) -> TimelineResult<Option<bool>> {
        match self.stage_split.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<bool>().map(Some).map_err(|_| {
                TimelineError::invalid_selection(format!(
                    "stage_split must be 'true' or 'false', got '{}'",
                    raw
                ))
            }),
        }
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Whether the planting schedule file is readable
    pub data_file: String,
}
