//! Project configuration storage.
//!
//! The orchestrator fetches a fresh [`ProjectConfig`] for every request;
//! nothing is cached on this side of the trait.

mod error;
mod traits;
mod types;

pub use error::ConfigStoreError;
pub use traits::ConfigStore;
pub use types::ProjectConfig;
