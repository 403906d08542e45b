pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::batch::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Batch API
        .route("/api/v1/batches", post(handlers::handle_submit_batch))
        .route("/api/v1/batches/latest", get(handlers::handle_latest_batch))
        .route(
            "/api/v1/batches/latest/csv",
            get(handlers::handle_export_csv),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
