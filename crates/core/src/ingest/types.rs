//! Types for the ingestion orchestrator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed metrics submission.
///
/// Immutable once parsed; the metrics blob is carried through the pipeline
/// unmodified.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestionRequest {
    /// Project the submission belongs to.
    pub project_id: String,
    /// Opaque structured metrics blob.
    pub metrics: Value,
    /// Correlates the submission to out-of-band context, when present.
    #[serde(default)]
    pub trace_id: Option<String>,
}

/// Caller-visible result of one ingestion request.
///
/// The request id is generated once at the start of processing, but
/// `Completed.persisted` is the only authoritative durability signal: a
/// request id paired with `persisted == false` was returned for correlation,
/// not as a durability claim. [`IngestionOutcome::InferenceFailed`] likewise
/// carries the id purely for correlation; nothing was persisted on that path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestionOutcome {
    /// The full pipeline ran; durability depends on `persisted`.
    Completed {
        project_id: String,
        request_id: String,
        fingerprint_id: String,
        /// True iff the metrics store confirmed the write.
        persisted: bool,
    },
    /// Ingestion is disabled for the project. Nothing beyond the config
    /// lookup ran and no state was touched.
    Disabled { project_id: String, error: String },
    /// The fingerprint service failed or timed out. Not retried; the request
    /// id is informational only.
    InferenceFailed {
        project_id: String,
        request_id: String,
        error: String,
    },
}

impl IngestionOutcome {
    /// HTTP-equivalent status code for the outcome.
    pub fn status(&self) -> u16 {
        match self {
            IngestionOutcome::Completed { .. } => 200,
            IngestionOutcome::Disabled { .. } => 403,
            IngestionOutcome::InferenceFailed { .. } => 200,
        }
    }

    /// Request id carried by the outcome, if any.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            IngestionOutcome::Completed { request_id, .. } => Some(request_id),
            IngestionOutcome::Disabled { .. } => None,
            IngestionOutcome::InferenceFailed { request_id, .. } => Some(request_id),
        }
    }

    /// Short label used for logging and metrics.
    pub fn result_label(&self) -> &'static str {
        match self {
            IngestionOutcome::Completed {
                persisted: true, ..
            } => "completed",
            IngestionOutcome::Completed {
                persisted: false, ..
            } => "completed_unpersisted",
            IngestionOutcome::Disabled { .. } => "disabled",
            IngestionOutcome::InferenceFailed { .. } => "inference_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_minimal_body() {
        let request: IngestionRequest =
            serde_json::from_str(r#"{"project_id":"abc123","metrics":{}}"#).unwrap();
        assert_eq!(request.project_id, "abc123");
        assert!(request.trace_id.is_none());
    }

    #[test]
    fn test_request_missing_metrics_is_rejected() {
        let result =
            serde_json::from_str::<IngestionRequest>(r#"{"project_id":"abc123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let request: IngestionRequest = serde_json::from_str(
            r#"{"project_id":"p","metrics":{"cpu":1},"extra":"ignored"}"#,
        )
        .unwrap();
        assert_eq!(request.metrics["cpu"], 1);
    }

    #[test]
    fn test_outcome_status_codes() {
        let disabled = IngestionOutcome::Disabled {
            project_id: "p".to_string(),
            error: "disabled".to_string(),
        };
        assert_eq!(disabled.status(), 403);
        assert!(disabled.request_id().is_none());

        let failed = IngestionOutcome::InferenceFailed {
            project_id: "p".to_string(),
            request_id: "r".to_string(),
            error: "inference failed".to_string(),
        };
        assert_eq!(failed.status(), 200);
        assert_eq!(failed.request_id(), Some("r"));
    }

    #[test]
    fn test_result_label_distinguishes_persistence() {
        let persisted = IngestionOutcome::Completed {
            project_id: "p".to_string(),
            request_id: "r".to_string(),
            fingerprint_id: "f".to_string(),
            persisted: true,
        };
        let unpersisted = IngestionOutcome::Completed {
            project_id: "p".to_string(),
            request_id: "r".to_string(),
            fingerprint_id: "f".to_string(),
            persisted: false,
        };
        assert_eq!(persisted.result_label(), "completed");
        assert_eq!(unpersisted.result_label(), "completed_unpersisted");
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = IngestionOutcome::Disabled {
            project_id: "p".to_string(),
            error: "disabled".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "disabled");
        assert_eq!(json["error"], "disabled");
    }
}
