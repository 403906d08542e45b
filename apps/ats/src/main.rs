mod batch;
mod config;
mod errors;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::batch::store::BatchStore;
use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::config::ScoringConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS scorer v{}", env!("CARGO_PKG_VERSION"));

    let scoring = ScoringConfig::load(config.scoring_config_path.as_deref())?;
    match &config.scoring_config_path {
        Some(path) => info!("Scoring config loaded from {}", path.display()),
        None => info!("Using built-in scoring config"),
    }
    info!(
        vocabulary = scoring.vocabulary.len(),
        bonuses = scoring.bonuses.len(),
        selected = scoring.thresholds.selected,
        borderline = scoring.thresholds.borderline,
        "Scoring heuristics ready"
    );

    std::fs::create_dir_all(&config.upload_dir)?;
    info!("Uploads stored in {}", config.upload_dir.display());

    let state = AppState {
        config: config.clone(),
        scoring: Arc::new(scoring),
        batches: BatchStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
