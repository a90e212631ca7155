//! Types for the config store module.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-project ingestion policy.
///
/// Fetched fresh for every request. The `api_key` is an opaque credential
/// carried for the transport layer; orchestration logic never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project this configuration belongs to.
    pub project_id: String,
    /// Whether ingestion is enabled for the project.
    pub enabled: bool,
    /// Opaque project credential.
    pub api_key: String,
    /// How long to wait for out-of-band context on a cache miss.
    pub context_wait_ms: u64,
    /// Upper bound on the fingerprint service call.
    pub inference_timeout_ms: u64,
}

impl ProjectConfig {
    /// Bounded rendezvous wait as a [`Duration`].
    pub fn context_wait(&self) -> Duration {
        Duration::from_millis(self.context_wait_ms)
    }

    /// Fingerprint call bound as a [`Duration`].
    pub fn inference_timeout(&self) -> Duration {
        Duration::from_millis(self.inference_timeout_ms)
    }
}
