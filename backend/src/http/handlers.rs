//! HTTP handlers for the REST API.
//!
//! Each handler re-runs the pipeline against the data file; the work is
//! synchronous file I/O, so it runs on the blocking pool.

use axum::{extract::State, Json};
use axum_extra::extract::Query;

use super::dto::{FacetOptions, HealthResponse, TimelineData, TimelineQuery};
use super::error::AppError;
use super::state::AppState;
use crate::config::PipelineConfig;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the data file exists.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let data_file = match tokio::fs::metadata(state.csv_path.as_path()).await {
        Ok(meta) if meta.is_file() => "available".to_string(),
        _ => format!("missing: {}", state.csv_path.display()),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        data_file,
    }))
}

// =============================================================================
// Timeline Endpoints
// =============================================================================

/// GET /v1/timeline
///
/// Filtered, ordered timeline data for the current selection.
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> HandlerResult<TimelineData> {
    let selection = query.selection();
    let mut config: PipelineConfig = state.config.as_ref().clone();
    if let Some(split) = query.stage_split()? {
        config.include_stage_split = split;
    }
    let csv_path = state.csv_path.clone();

    let data = tokio::task::spawn_blocking(move || {
        services::build_timeline(&csv_path, &selection, &config)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(data))
}

/// GET /v1/facets
///
/// Distinct values per facet for populating the selection widgets.
pub async fn get_facets(State(state): State<AppState>) -> HandlerResult<FacetOptions> {
    let csv_path = state.csv_path.clone();
    let config = state.config.clone();

    let options = tokio::task::spawn_blocking(move || {
        services::load_facet_options(&csv_path, &config)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(options))
}
