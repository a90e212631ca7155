//! Trait definition for the config store module.

use async_trait::async_trait;

use super::error::ConfigStoreError;
use super::types::ProjectConfig;

/// Storage backend for per-project ingestion policy.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetches the configuration for a project.
    ///
    /// A failure here is fatal to the request: without configuration there
    /// is no policy to apply.
    async fn get_project_config(&self, project_id: &str)
        -> Result<ProjectConfig, ConfigStoreError>;
}
