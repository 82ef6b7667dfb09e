//! # Seed Timeline Backend
//!
//! Data pipeline behind the seed planting timeline dashboard.
//!
//! The crate reads a small delimited file of seed-planting dates and turns it
//! into a plottable, orderable, filterable timeline dataset. Rendering is left
//! to the dashboard front end; this crate hands it filtered records, a
//! categorical axis order and a growing-season window.
//!
//! ## Pipeline
//!
//! `load -> normalize -> derive -> adjust -> filter -> order`
//!
//! Each stage is a pure function, so every stage can be exercised without a
//! UI harness. The whole pipeline is re-run from scratch for every request.
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV reading, header contract, date normalization
//! - [`transformations`]: derivation, direct-sow adjustment, filtering, ordering
//! - [`services`]: orchestration of the pipeline into chart-ready data
//! - [`config`]: pipeline knobs (TOML) and server settings (env)
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod transformations;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::{MissingDatePolicy, PipelineConfig, ServerConfig};
pub use error::{TimelineError, TimelineResult};
pub use models::{PlantingMethod, PlantingRecord, SeasonWindow};
pub use services::{build_timeline, TimelineData};
pub use transformations::{Facet, FacetSelection};
