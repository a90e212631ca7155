use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ingest::IngestorConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestorConfig,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),
}
