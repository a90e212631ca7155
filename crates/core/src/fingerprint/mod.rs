//! Remote fingerprint computation.

mod error;
mod traits;
mod types;

pub use error::FingerprintError;
pub use traits::FingerprintService;
pub use types::FingerprintResult;
