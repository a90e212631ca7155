//! Error types for the config store module.

use thiserror::Error;

/// Errors that can occur while fetching project configuration.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// The backing store could not be reached or answered with a fault.
    #[error("config store unavailable: {0}")]
    Unavailable(String),
}
