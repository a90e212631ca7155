//! Error types for the downstream module.

use thiserror::Error;

/// Errors that can occur while forwarding to the downstream queue.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue could not accept the payload.
    #[error("downstream queue unavailable: {0}")]
    Unavailable(String),
}
