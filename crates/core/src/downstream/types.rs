//! Types for the downstream module.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Denormalized payload forwarded to the downstream queue.
///
/// Constructed only after fingerprint computation succeeds.
#[derive(Debug, Clone, Serialize)]
pub struct DownstreamPayload {
    /// Request identifier generated at ingestion.
    pub request_id: String,
    /// Server receipt time.
    pub received_at: DateTime<Utc>,
    /// Project the submission belongs to.
    pub project_id: String,
    /// Trace id from the request, when supplied.
    pub trace_id: Option<String>,
    /// Fingerprint computed for the metrics blob.
    pub fingerprint_id: String,
    /// Raw metrics, passed through unmodified.
    pub metrics: Value,
    /// Context resolved at the rendezvous point; empty when unresolved.
    pub context: Map<String, Value>,
}
