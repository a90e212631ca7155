//! Durable persistence of fingerprinted submissions.

mod error;
mod traits;

pub use error::MetricsStoreError;
pub use traits::MetricsStore;
