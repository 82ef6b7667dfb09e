//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::PipelineConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Planting schedule file, re-read per request
    pub csv_path: Arc<PathBuf>,
    pub config: Arc<PipelineConfig>,
}

impl AppState {
    pub fn new(csv_path: impl Into<PathBuf>, config: PipelineConfig) -> Self {
        Self {
            csv_path: Arc::new(csv_path.into()),
            config: Arc::new(config),
        }
    }
}
