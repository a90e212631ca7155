//! Mock config store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config_store::{ConfigStore, ConfigStoreError, ProjectConfig};

use super::fixtures;

/// Mock implementation of the ConfigStore trait.
///
/// Unknown projects resolve to an enabled default configuration, so most
/// tests only need to override what they care about:
/// - Register explicit configurations per project
/// - Toggle enablement or timing fields
/// - Simulate a store outage
#[derive(Debug)]
pub struct MockConfigStore {
    /// Explicit per-project configurations.
    configs: Arc<RwLock<HashMap<String, ProjectConfig>>>,
    /// When true, every lookup fails with `Unavailable`.
    unavailable: Arc<RwLock<bool>>,
    /// Project ids looked up, in order.
    lookups: Arc<RwLock<Vec<String>>>,
}

impl Default for MockConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConfigStore {
    /// Create a new mock config store.
    pub fn new() -> Self {
        Self {
            configs: Arc::new(RwLock::new(HashMap::new())),
            unavailable: Arc::new(RwLock::new(false)),
            lookups: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register an explicit configuration for a project.
    pub async fn set_config(&self, config: ProjectConfig) {
        self.configs
            .write()
            .await
            .insert(config.project_id.clone(), config);
    }

    /// Toggle enablement for a project, creating a default config if needed.
    pub async fn set_enabled(&self, project_id: &str, enabled: bool) {
        let mut configs = self.configs.write().await;
        let config = configs
            .entry(project_id.to_string())
            .or_insert_with(|| fixtures::project_config(project_id));
        config.enabled = enabled;
    }

    /// Set the context rendezvous wait for a project.
    pub async fn set_context_wait_ms(&self, project_id: &str, wait_ms: u64) {
        let mut configs = self.configs.write().await;
        let config = configs
            .entry(project_id.to_string())
            .or_insert_with(|| fixtures::project_config(project_id));
        config.context_wait_ms = wait_ms;
    }

    /// Set the fingerprint call bound for a project.
    pub async fn set_inference_timeout_ms(&self, project_id: &str, timeout_ms: u64) {
        let mut configs = self.configs.write().await;
        let config = configs
            .entry(project_id.to_string())
            .or_insert_with(|| fixtures::project_config(project_id));
        config.inference_timeout_ms = timeout_ms;
    }

    /// Simulate (or clear) a store outage.
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    /// Number of lookups performed.
    pub async fn lookup_count(&self) -> usize {
        self.lookups.read().await.len()
    }
}

#[async_trait]
impl ConfigStore for MockConfigStore {
    async fn get_project_config(
        &self,
        project_id: &str,
    ) -> Result<ProjectConfig, ConfigStoreError> {
        self.lookups.write().await.push(project_id.to_string());

        if *self.unavailable.read().await {
            return Err(ConfigStoreError::Unavailable(
                "simulated store outage".to_string(),
            ));
        }

        let configs = self.configs.read().await;
        Ok(configs
            .get(project_id)
            .cloned()
            .unwrap_or_else(|| fixtures::project_config(project_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults_to_enabled_config() {
        let store = MockConfigStore::new();
        let config = store.get_project_config("abc123").await.unwrap();
        assert!(config.enabled);
        assert_eq!(config.project_id, "abc123");
        assert_eq!(store.lookup_count().await, 1);
    }

    #[tokio::test]
    async fn test_set_enabled_overrides_default() {
        let store = MockConfigStore::new();
        store.set_enabled("abc123", false).await;
        let config = store.get_project_config("abc123").await.unwrap();
        assert!(!config.enabled);
    }

    #[tokio::test]
    async fn test_outage_injection() {
        let store = MockConfigStore::new();
        store.set_unavailable(true).await;
        let result = store.get_project_config("abc123").await;
        assert!(matches!(result, Err(ConfigStoreError::Unavailable(_))));

        store.set_unavailable(false).await;
        assert!(store.get_project_config("abc123").await.is_ok());
    }
}
