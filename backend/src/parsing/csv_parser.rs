use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::columns::{AvailableFacets, ColumnMap};
use crate::error::{ErrorContext, TimelineError, TimelineResult};

/// One source row with columns already mapped to semantic names.
///
/// Cells are trimmed; blank cells become `None`. Dates are still raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub seed: Option<String>,
    pub variant: Option<String>,
    pub planting_method: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub season: Option<String>,
    pub frost: Option<String>,
}

/// All rows of one file plus the optional facets its header declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
    pub facets: AvailableFacets,
}

/// Read a planting schedule file from disk.
pub fn load_rows(path: &Path) -> TimelineResult<RawTable> {
    let file = File::open(path).map_err(|e| {
        TimelineError::io(e, ErrorContext::new("load_rows").with_path(path))
    })?;
    read_rows(file).map_err(|e| with_path(e, path))
}

/// Read a planting schedule from any reader.
///
/// Fails only when the header row is unreadable or lacks a required column,
/// or when the CSV framing itself is broken. Short rows are tolerated and
/// their missing cells read as blank.
pub fn read_rows<R: Read>(reader: R) -> TimelineResult<RawTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| TimelineError::csv(e, ErrorContext::new("read_headers")))?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| {
            TimelineError::csv(
                e,
                ErrorContext::new("read_rows").with_details(format!("data row {}", index + 1)),
            )
        })?;
        rows.push(map_record(&record, &columns));
    }

    debug!("Read {} planting rows", rows.len());

    Ok(RawTable {
        rows,
        facets: columns.available_facets(),
    })
}

fn map_record(record: &StringRecord, columns: &ColumnMap) -> RawRow {
    let cell = |index: usize| {
        record
            .get(index)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    RawRow {
        seed: cell(columns.seed),
        variant: cell(columns.variant),
        planting_method: cell(columns.planting_method),
        start_date: cell(columns.start_date),
        end_date: cell(columns.end_date),
        season: columns.season.and_then(cell),
        frost: columns.frost.and_then(cell),
    }
}

fn with_path(err: TimelineError, path: &Path) -> TimelineError {
    match err {
        TimelineError::Csv { source, context } => TimelineError::Csv {
            source,
            context: context.with_path(path),
        },
        TimelineError::MissingColumns { missing, context } => TimelineError::MissingColumns {
            missing,
            context: context.with_path(path),
        },
        other => other,
    }
}
