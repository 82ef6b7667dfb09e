use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a seed gets into the ground.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PlantingMethod {
    /// Started in trays indoors, transplanted later.
    StartIndoors,
    /// Sown straight into the final growing location.
    DirectSow,
    /// Any other value found in the source file, kept verbatim (trimmed).
    Other(String),
}

impl PlantingMethod {
    pub const START_INDOORS: &'static str = "Start Indoors";
    pub const DIRECT_SOW: &'static str = "Direct Sow";

    /// Parse a raw cell. Matching ignores case and surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(Self::START_INDOORS) {
            Self::StartIndoors
        } else if trimmed.eq_ignore_ascii_case(Self::DIRECT_SOW) {
            Self::DirectSow
        } else {
            Self::Other(trimmed.to_string())
        }
    }

    /// Label used for facet matching and as the chart colour key.
    pub fn label(&self) -> &str {
        match self {
            Self::StartIndoors => Self::START_INDOORS,
            Self::DirectSow => Self::DIRECT_SOW,
            Self::Other(s) => s,
        }
    }

    pub fn is_direct_sow(&self) -> bool {
        matches!(self, Self::DirectSow)
    }
}

impl fmt::Display for PlantingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for PlantingMethod {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PlantingMethod> for String {
    fn from(m: PlantingMethod) -> Self {
        m.label().to_string()
    }
}

/// One row of the planting schedule after normalization and derivation.
///
/// Built fresh on every pipeline run and never mutated once the pipeline
/// has handed it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingRecord {
    pub seed_name: String,
    pub variant: Option<String>,
    pub planting_method: PlantingMethod,
    /// When the seed starts indoors (or the back-dated sow window for direct sow)
    pub start_date: Option<NaiveDate>,
    /// Transplant / sow date
    pub end_date: Option<NaiveDate>,
    pub season: Option<String>,
    pub frost: Option<String>,
    /// `seed_name` and `variant` joined by a space and trimmed
    pub display_name: String,
}

impl PlantingRecord {
    /// True when either date failed to parse or was blank.
    pub fn has_missing_dates(&self) -> bool {
        self.start_date.is_none() || self.end_date.is_none()
    }
}
