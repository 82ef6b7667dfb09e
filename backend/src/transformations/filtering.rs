use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::PlantingRecord;
use crate::parsing::columns::AvailableFacets;

/// A categorical field usable as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Season,
    Frost,
    PlantingMethod,
    DisplayName,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::Season,
        Facet::Frost,
        Facet::PlantingMethod,
        Facet::DisplayName,
    ];

    /// The record's value for this facet, if it has one.
    pub fn value_of<'a>(&self, record: &'a PlantingRecord) -> Option<&'a str> {
        match self {
            Facet::Season => record.season.as_deref(),
            Facet::Frost => record.frost.as_deref(),
            Facet::PlantingMethod => Some(record.planting_method.label()),
            Facet::DisplayName => Some(record.display_name.as_str()),
        }
    }

    /// Whether the input file carried this facet's column.
    pub fn is_available(&self, facets: AvailableFacets) -> bool {
        match self {
            Facet::Season => facets.season,
            Facet::Frost => facets.frost,
            Facet::PlantingMethod | Facet::DisplayName => true,
        }
    }
}

/// Selected values per facet, as supplied by the UI layer.
///
/// An empty set means "no constraint" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    #[serde(default)]
    pub season: BTreeSet<String>,
    #[serde(default)]
    pub frost: BTreeSet<String>,
    #[serde(default)]
    pub planting_method: BTreeSet<String>,
    #[serde(default)]
    pub display_name: BTreeSet<String>,
}

impl FacetSelection {
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Season => &self.season,
            Facet::Frost => &self.frost,
            Facet::PlantingMethod => &self.planting_method,
            Facet::DisplayName => &self.display_name,
        }
    }

    pub fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Season => &mut self.season,
            Facet::Frost => &mut self.frost,
            Facet::PlantingMethod => &mut self.planting_method,
            Facet::DisplayName => &mut self.display_name,
        }
    }

    /// Builder-style helper for selecting values on one facet.
    pub fn with<I, S>(mut self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_mut(facet)
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selected(*f).is_empty())
    }

    /// Whether `record` satisfies every active, available facet.
    pub fn matches(&self, record: &PlantingRecord, facets: AvailableFacets) -> bool {
        Facet::ALL.iter().all(|facet| {
            let selected = self.selected(*facet);
            if selected.is_empty() || !facet.is_available(facets) {
                return true;
            }
            facet
                .value_of(record)
                .map(|value| selected.contains(value))
                .unwrap_or(false)
        })
    }
}

/// Keep the records that satisfy the selection, preserving input order.
pub fn filter_records(
    records: &[PlantingRecord],
    selection: &FacetSelection,
    facets: AvailableFacets,
) -> Vec<PlantingRecord> {
    if selection.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| selection.matches(r, facets))
        .cloned()
        .collect()
}

/// Distinct values per facet, used to populate the selection widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub season: Vec<String>,
    pub frost: Vec<String>,
    pub planting_method: Vec<String>,
    pub display_name: Vec<String>,
}

/// Collect the sorted distinct values of every available facet.
///
/// Unavailable facets yield an empty list; missing values are skipped.
pub fn facet_options(records: &[PlantingRecord], facets: AvailableFacets) -> FacetOptions {
    let distinct = |facet: Facet| -> Vec<String> {
        if !facet.is_available(facets) {
            return Vec::new();
        }
        records
            .iter()
            .filter_map(|r| facet.value_of(r))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };

    FacetOptions {
        season: distinct(Facet::Season),
        frost: distinct(Facet::Frost),
        planting_method: distinct(Facet::PlantingMethod),
        display_name: distinct(Facet::DisplayName),
    }
}
