//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of all collaborator traits,
//! allowing full ingestion-flow testing without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use pulse_core::testing::{MockConfigStore, MockContextCache};
//!
//! let config_store = MockConfigStore::new();
//! let cache = MockContextCache::new();
//!
//! // Configure mock behavior
//! config_store.set_enabled("abc123", false).await;
//! cache.insert("ctx:t1", r#"{"region":"eu"}"#).await;
//!
//! // Inject into an Ingestor...
//! ```

mod mock_config_store;
mod mock_context_cache;
mod mock_downstream_queue;
mod mock_fingerprint_service;
mod mock_metrics_store;

pub use mock_config_store::MockConfigStore;
pub use mock_context_cache::MockContextCache;
pub use mock_downstream_queue::{MockDownstreamQueue, RecordedUpload};
pub use mock_fingerprint_service::{MockFingerprintService, RecordedFingerprint};
pub use mock_metrics_store::{MockMetricsStore, SavedFingerprint};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::config_store::ProjectConfig;

    /// Create an enabled project configuration with reasonable defaults.
    pub fn project_config(project_id: &str) -> ProjectConfig {
        ProjectConfig {
            project_id: project_id.to_string(),
            enabled: true,
            api_key: "proj_secret".to_string(),
            context_wait_ms: 50,
            inference_timeout_ms: 200,
        }
    }

    /// Minimal valid request body for a project.
    pub fn request_body(project_id: &str) -> String {
        format!(r#"{{"project_id":"{}","metrics":{{}}}}"#, project_id)
    }

    /// Valid request body carrying a trace id.
    pub fn request_body_with_trace(project_id: &str, trace_id: &str) -> String {
        format!(
            r#"{{"project_id":"{}","metrics":{{"cpu":0.5}},"trace_id":"{}"}}"#,
            project_id, trace_id
        )
    }
}
