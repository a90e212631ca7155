//! Trait definition for the fingerprint module.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::error::FingerprintError;
use super::types::FingerprintResult;

/// Remote service computing a content fingerprint for a metrics blob.
#[async_trait]
pub trait FingerprintService: Send + Sync {
    /// Computes the fingerprint for `metrics`.
    ///
    /// `timeout` is a hard upper bound; implementations should honor it, and
    /// the orchestrator enforces it regardless. Exceeding it is treated
    /// identically to a remote error.
    async fn fingerprint(
        &self,
        project_id: &str,
        metrics: &Value,
        timeout: Duration,
    ) -> Result<FingerprintResult, FingerprintError>;
}
