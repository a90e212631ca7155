//! Error types for the metrics store module.

use thiserror::Error;

/// Errors that can occur while persisting a fingerprinted submission.
#[derive(Debug, Error)]
pub enum MetricsStoreError {
    /// A transient storage fault; the write may succeed if attempted again.
    #[error("transient metrics store error: {0}")]
    Transient(String),
}
