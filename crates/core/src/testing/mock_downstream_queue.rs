//! Mock downstream queue for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::downstream::{DownstreamPayload, DownstreamQueue, QueueError};

/// A recorded upload for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    /// Project the upload was attached to.
    pub project_id: String,
    /// The payload that was pushed.
    pub payload: DownstreamPayload,
}

/// Mock implementation of the DownstreamQueue trait.
#[derive(Debug)]
pub struct MockDownstreamQueue {
    /// Recorded uploads.
    uploads: Arc<RwLock<Vec<RecordedUpload>>>,
    /// When true, every upload fails as if the queue were down.
    unavailable: Arc<RwLock<bool>>,
}

impl Default for MockDownstreamQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDownstreamQueue {
    /// Create a new mock downstream queue.
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(RwLock::new(Vec::new())),
            unavailable: Arc::new(RwLock::new(false)),
        }
    }

    /// Simulate (or clear) a queue outage.
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    /// Get all recorded uploads.
    pub async fn recorded_uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.read().await.clone()
    }

    /// Number of successful uploads.
    pub async fn upload_count(&self) -> usize {
        self.uploads.read().await.len()
    }
}

#[async_trait]
impl DownstreamQueue for MockDownstreamQueue {
    async fn upload(
        &self,
        project_id: &str,
        payload: &DownstreamPayload,
    ) -> Result<(), QueueError> {
        if *self.unavailable.read().await {
            return Err(QueueError::Unavailable(
                "simulated queue outage".to_string(),
            ));
        }

        self.uploads.write().await.push(RecordedUpload {
            project_id: project_id.to_string(),
            payload: payload.clone(),
        });

        Ok(())
    }
}
