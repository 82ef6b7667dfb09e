//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the pure transform functions:
//! they load the input, run the pipeline stages in order, and assemble the
//! response payload.

pub mod timeline;

pub use timeline::{
    build_timeline, build_timeline_from_reader, compute_timeline_data, load_facet_options,
    prepare_records, PreparedSchedule, TimelineBar, TimelineData,
};
