//! Mock context cache for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::context_cache::ContextCache;

/// Mock implementation of the ContextCache trait.
///
/// Besides a plain key/value store, a key can be configured to miss a fixed
/// number of times before the stored value becomes visible. That reproduces
/// the race with the out-of-band producer that the rendezvous wait exists
/// for.
#[derive(Debug)]
pub struct MockContextCache {
    store: Arc<RwLock<HashMap<String, String>>>,
    /// Remaining misses per key before the value is served.
    misses_before_hit: Arc<RwLock<HashMap<String, u32>>>,
    /// Keys probed, in order.
    gets: Arc<RwLock<Vec<String>>>,
}

impl Default for MockContextCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MockContextCache {
    /// Create a new mock context cache.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            misses_before_hit: Arc::new(RwLock::new(HashMap::new())),
            gets: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Store raw context under a key.
    pub async fn insert(&self, key: &str, raw: &str) {
        self.store
            .write()
            .await
            .insert(key.to_string(), raw.to_string());
    }

    /// Make the next `misses` probes for `key` return `None` before the
    /// stored value becomes visible.
    pub async fn set_misses_before_hit(&self, key: &str, misses: u32) {
        self.misses_before_hit
            .write()
            .await
            .insert(key.to_string(), misses);
    }

    /// Keys probed so far, in order.
    pub async fn recorded_gets(&self) -> Vec<String> {
        self.gets.read().await.clone()
    }

    /// Number of probes performed.
    pub async fn get_count(&self) -> usize {
        self.gets.read().await.len()
    }
}

#[async_trait]
impl ContextCache for MockContextCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.gets.write().await.push(key.to_string());

        {
            let mut misses = self.misses_before_hit.write().await;
            if let Some(remaining) = misses.get_mut(key) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return None;
                }
            }
        }

        self.store.read().await.get(key).cloned()
    }
}
