//! Seed timeline HTTP server binary
//!
//! Serves the filtered planting timeline to the dashboard front end.
//!
//! # Usage
//!
//! ```bash
//! SEED_CSV_PATH=2025-seeds.csv cargo run --bin seed-timeline-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SEED_CSV_PATH`: Planting schedule file (default: 2025-seeds.csv)
//! - `TIMELINE_CONFIG`: Pipeline config file (default: search for timeline.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use seed_timeline::http::{create_router, AppState};
use seed_timeline::parsing;
use seed_timeline::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting seed timeline server");

    let server_config = ServerConfig::from_env()?;
    let pipeline_config = server_config.pipeline_config()?;
    info!(
        "Pipeline: adjust {} days, season {} to {}, stage split {}, missing dates {:?}",
        pipeline_config.date_adjust_days,
        pipeline_config.season_start,
        pipeline_config.season_end,
        pipeline_config.include_stage_split,
        pipeline_config.missing_date_policy,
    );

    // Fail fast on a file that lacks required columns; a missing file is
    // only a warning because it may appear later.
    match parsing::load_rows(&server_config.csv_path) {
        Ok(table) => info!(
            "Loaded {} rows from {}",
            table.rows.len(),
            server_config.csv_path.display()
        ),
        Err(e) if e.is_configuration() => return Err(e.into()),
        Err(e) => warn!("Data file not readable yet: {}", e),
    }

    let state = AppState::new(server_config.csv_path.clone(), pipeline_config);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", server_config.host, server_config.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
