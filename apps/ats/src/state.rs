use std::sync::Arc;

use crate::batch::store::BatchStore;
use crate::config::Config;
use crate::scoring::config::ScoringConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Heuristics applied to every batch. Fixed for the process lifetime.
    pub scoring: Arc<ScoringConfig>,
    pub batches: BatchStore,
}
