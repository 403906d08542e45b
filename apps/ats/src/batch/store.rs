use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::scoring::aggregate::ScoreResult;

/// A fully scored submission. `results` is ordered by rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub batch_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub job_keywords: Vec<String>,
    pub skipped: usize,
    pub results: Vec<ScoreResult>,
}

/// Holds the most recent batch. Empty until the first submission; each new
/// batch replaces the previous one in full.
#[derive(Clone, Default)]
pub struct BatchStore {
    latest: Arc<RwLock<Option<Batch>>>,
}

impl BatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, batch: Batch) {
        *self.latest.write().await = Some(batch);
    }

    pub async fn latest(&self) -> Option<Batch> {
        self.latest.read().await.clone()
    }
}
