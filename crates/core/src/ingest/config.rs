//! Configuration for the ingestion orchestrator.

use serde::{Deserialize, Serialize};

/// Process-level settings for the orchestrator.
///
/// Per-project policy (enablement, waits, timeouts) lives in
/// [`crate::config_store::ProjectConfig`] and is fetched per request; this
/// struct only carries what is fixed for the deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestorConfig {
    /// Prefix prepended to the trace id when probing the context cache.
    pub context_key_prefix: String,
}

impl Default for IngestorConfig {
    fn default() -> Self {
        Self {
            context_key_prefix: "ctx:".to_string(),
        }
    }
}

impl IngestorConfig {
    /// Cache key for a trace id.
    pub fn context_key(&self, trace_id: &str) -> String {
        format!("{}{}", self.context_key_prefix, trace_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_key() {
        let config = IngestorConfig::default();
        assert_eq!(config.context_key("t1"), "ctx:t1");
    }

    #[test]
    fn test_custom_prefix() {
        let config = IngestorConfig {
            context_key_prefix: "enrich/".to_string(),
        };
        assert_eq!(config.context_key("abc"), "enrich/abc");
    }
}
