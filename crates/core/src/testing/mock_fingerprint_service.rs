//! Mock fingerprint service for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use serde_json::Value;

use crate::fingerprint::{FingerprintError, FingerprintResult, FingerprintService};

/// A recorded fingerprint call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedFingerprint {
    /// Project the call was made for.
    pub project_id: String,
    /// Metrics blob that was submitted.
    pub metrics: Value,
    /// Timeout advertised by the caller.
    pub timeout: Duration,
}

/// Mock implementation of the FingerprintService trait.
///
/// Successful calls return `fp_{project_id}`, matching the project-derived
/// prefix the real service uses. Behavior knobs:
/// - Fail every call with an injected error
/// - Delay responses to exercise the caller-side timeout
/// - Record calls for assertions
#[derive(Debug)]
pub struct MockFingerprintService {
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedFingerprint>>>,
    /// When set, every call fails with a clone of this message.
    remote_error: Arc<RwLock<Option<String>>>,
    /// Simulated response delay in milliseconds.
    delay_ms: Arc<RwLock<u64>>,
}

impl Default for MockFingerprintService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFingerprintService {
    /// Create a new mock fingerprint service.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            remote_error: Arc::new(RwLock::new(None)),
            delay_ms: Arc::new(RwLock::new(0)),
        }
    }

    /// Make every call fail with a remote error.
    pub async fn set_remote_error(&self, message: &str) {
        *self.remote_error.write().await = Some(message.to_string());
    }

    /// Clear the injected error.
    pub async fn clear_remote_error(&self) {
        *self.remote_error.write().await = None;
    }

    /// Set the simulated response delay.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay_ms.write().await = delay.as_millis() as u64;
    }

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedFingerprint> {
        self.calls.read().await.clone()
    }

    /// Number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl FingerprintService for MockFingerprintService {
    async fn fingerprint(
        &self,
        project_id: &str,
        metrics: &Value,
        timeout: Duration,
    ) -> Result<FingerprintResult, FingerprintError> {
        self.calls.write().await.push(RecordedFingerprint {
            project_id: project_id.to_string(),
            metrics: metrics.clone(),
            timeout,
        });

        let delay_ms = *self.delay_ms.read().await;
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        if let Some(message) = self.remote_error.read().await.clone() {
            return Err(FingerprintError::Remote(message));
        }

        Ok(FingerprintResult {
            fingerprint_id: format!("fp_{}", project_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_returns_project_derived_fingerprint() {
        let service = MockFingerprintService::new();
        let result = service
            .fingerprint("abc123", &json!({}), Duration::from_millis(200))
            .await
            .unwrap();
        assert_eq!(result.fingerprint_id, "fp_abc123");
        assert_eq!(service.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_error_injection() {
        let service = MockFingerprintService::new();
        service.set_remote_error("503 from upstream").await;

        let result = service
            .fingerprint("abc123", &json!({}), Duration::from_millis(200))
            .await;
        assert!(matches!(result, Err(FingerprintError::Remote(_))));

        service.clear_remote_error().await;
        assert!(service
            .fingerprint("abc123", &json!({}), Duration::from_millis(200))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_records_timeout_advertised_by_caller() {
        let service = MockFingerprintService::new();
        service
            .fingerprint("p", &json!({"cpu": 1}), Duration::from_millis(75))
            .await
            .unwrap();

        let calls = service.recorded_calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].timeout, Duration::from_millis(75));
        assert_eq!(calls[0].metrics["cpu"], 1);
    }
}
