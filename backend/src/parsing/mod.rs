//! Readers for planting schedule input.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Read the delimited seed file into [`RawRow`]s
//! - [`columns`]: Header contract and the mapping of source columns onto semantic fields
//! - [`dates`]: Lenient calendar-date normalization
//!
//! # Example
//!
//! ```no_run
//! use seed_timeline::parsing::load_rows;
//! use std::path::Path;
//!
//! let table = load_rows(Path::new("2025-seeds.csv")).expect("Failed to read seeds");
//! println!("{} rows", table.rows.len());
//! ```

pub mod columns;
pub mod csv_parser;
pub mod dates;


pub use columns::{AvailableFacets, ColumnMap};
pub use csv_parser::{load_rows, read_rows, RawRow, RawTable};
pub use dates::{normalize_date, normalize_optional_date};
