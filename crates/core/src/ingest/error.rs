//! Error types for the ingestion orchestrator.

use thiserror::Error;

use crate::config_store::ConfigStoreError;
use crate::downstream::QueueError;

/// Hard failures of an ingestion request.
///
/// Everything else a collaborator can do wrong is translated into an
/// [`crate::ingest::IngestionOutcome`] variant instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The request body was malformed or missing required fields.
    #[error("invalid ingestion request: {0}")]
    InvalidInput(String),

    /// Project configuration could not be fetched.
    #[error("project configuration unavailable: {0}")]
    ConfigUnavailable(#[from] ConfigStoreError),

    /// Downstream forwarding failed.
    ///
    /// This fails the whole request even when persistence already succeeded.
    /// Intentional boundary behavior carried over from the source system;
    /// callers observing it get a distinct variant rather than silent retry.
    #[error("downstream forwarding failed: {0}")]
    DownstreamFailed(#[from] QueueError),
}
