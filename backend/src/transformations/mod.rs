//! The planting schedule transform pipeline.
//!
//! Each stage is a pure function over owned or borrowed record sets:
//!
//! - [`derive`]: normalize dates, parse the planting method, build display names
//! - [`adjust`]: back-date direct-sow start dates
//! - [`cleaning`]: apply the missing-date policy
//! - [`filtering`]: inclusive-by-default multi-facet filtering
//! - [`ordering`]: categorical-axis order by earliest start date
//! - [`stages`]: long-form start/transplant events
//!
//! # Example
//!
//! ```
//! use seed_timeline::parsing::read_rows;
//! use seed_timeline::transformations::{adjust_direct_sow, derive_records, display_order};
//!
//! let csv = "Seed,Variant,Planting Method,Start Indoors,Transplant / Sow\n\
//!            Tomato,Roma,Direct Sow,,2025-05-01\n";
//! let table = read_rows(csv.as_bytes()).unwrap();
//! let records = adjust_direct_sow(derive_records(table.rows), 3);
//! assert_eq!(records[0].start_date.unwrap().to_string(), "2025-04-28");
//! assert_eq!(display_order(&records), vec!["Tomato Roma"]);
//! ```

pub mod adjust;
pub mod cleaning;
pub mod derive;
pub mod filtering;
pub mod ordering;
pub mod stages;

pub use adjust::adjust_direct_sow;
pub use cleaning::apply_missing_date_policy;
pub use derive::{build_display_name, derive_record, derive_records};
pub use filtering::{facet_options, filter_records, Facet, FacetOptions, FacetSelection};
pub use ordering::display_order;
pub use stages::{split_stages, Stage, StageEvent};
