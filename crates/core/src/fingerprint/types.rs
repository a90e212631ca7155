//! Types for the fingerprint module.

use serde::{Deserialize, Serialize};

/// Result of a fingerprint computation.
///
/// The identifier is an opaque token to the orchestrator; it is persisted
/// and forwarded but never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintResult {
    /// Opaque fingerprint identifier.
    pub fingerprint_id: String,
}
