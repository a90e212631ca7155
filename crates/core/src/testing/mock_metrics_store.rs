//! Mock metrics store for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::metrics_store::{MetricsStore, MetricsStoreError};

/// A persisted row recorded for test assertions.
#[derive(Debug, Clone)]
pub struct SavedFingerprint {
    /// Request the row belongs to.
    pub request_id: String,
    /// Project the submission belongs to.
    pub project_id: String,
    /// Fingerprint that was persisted.
    pub fingerprint_id: String,
    /// Raw metrics blob.
    pub metrics: Value,
    /// Receipt time recorded with the row.
    pub created_at: DateTime<Utc>,
}

/// Mock implementation of the MetricsStore trait.
///
/// Writes are recorded in memory; a transient failure can be injected for
/// the next save only, mirroring how the real store fails.
#[derive(Debug)]
pub struct MockMetricsStore {
    /// Recorded saves.
    saves: Arc<RwLock<Vec<SavedFingerprint>>>,
    /// If set, the next save fails with this message.
    next_error: Arc<RwLock<Option<String>>>,
}

impl Default for MockMetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMetricsStore {
    /// Create a new mock metrics store.
    pub fn new() -> Self {
        Self {
            saves: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the next save to fail transiently.
    pub async fn set_next_error(&self, message: &str) {
        *self.next_error.write().await = Some(message.to_string());
    }

    /// Get all recorded saves.
    pub async fn recorded_saves(&self) -> Vec<SavedFingerprint> {
        self.saves.read().await.clone()
    }

    /// Number of confirmed saves.
    pub async fn save_count(&self) -> usize {
        self.saves.read().await.len()
    }
}

#[async_trait]
impl MetricsStore for MockMetricsStore {
    async fn save_fingerprint(
        &self,
        request_id: &str,
        project_id: &str,
        fingerprint_id: &str,
        metrics: &Value,
        created_at: DateTime<Utc>,
    ) -> Result<(), MetricsStoreError> {
        if let Some(message) = self.next_error.write().await.take() {
            return Err(MetricsStoreError::Transient(message));
        }

        self.saves.write().await.push(SavedFingerprint {
            request_id: request_id.to_string(),
            project_id: project_id.to_string(),
            fingerprint_id: fingerprint_id.to_string(),
            metrics: metrics.clone(),
            created_at,
        });

        Ok(())
    }
}
