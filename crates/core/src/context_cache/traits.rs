//! Trait definition for the context cache module.

use async_trait::async_trait;

/// Read side of the out-of-band context cache.
#[async_trait]
pub trait ContextCache: Send + Sync {
    /// Looks up raw context by key.
    ///
    /// Returns `None` when the producer has not written the key yet.
    async fn get(&self, key: &str) -> Option<String>;
}
