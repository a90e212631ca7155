//! Trait definition for the metrics store module.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::error::MetricsStoreError;

/// Durable store for fingerprinted metrics submissions.
///
/// The row shape is delegated to the implementation; the orchestrator only
/// cares whether the write was confirmed.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Persists the fingerprint result for a request.
    async fn save_fingerprint(
        &self,
        request_id: &str,
        project_id: &str,
        fingerprint_id: &str,
        metrics: &Value,
        created_at: DateTime<Utc>,
    ) -> Result<(), MetricsStoreError>;
}
