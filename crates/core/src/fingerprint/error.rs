//! Error types for the fingerprint module.

use thiserror::Error;

/// Errors that can occur during fingerprint computation.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The call did not complete within the configured bound.
    #[error("fingerprint call timed out")]
    Timeout,

    /// The remote service answered with a fault.
    #[error("fingerprint service error: {0}")]
    Remote(String),
}
