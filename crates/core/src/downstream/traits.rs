//! Trait definition for the downstream module.

use async_trait::async_trait;

use super::error::QueueError;
use super::types::DownstreamPayload;

/// Queue-backed fan-out to downstream storage and indexing services.
#[async_trait]
pub trait DownstreamQueue: Send + Sync {
    /// Pushes a payload attached to a project id downstream.
    ///
    /// No timeout and no retry are applied to this call.
    async fn upload(&self, project_id: &str, payload: &DownstreamPayload)
        -> Result<(), QueueError>;
}
