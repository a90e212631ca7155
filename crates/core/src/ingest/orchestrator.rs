//! Ingestion orchestrator implementation.
//!
//! Drives one submission through the pipeline:
//! parse -> config -> context rendezvous -> fingerprint -> persist -> forward
//!
//! Within a request the steps are strictly sequential; concurrency exists
//! only between requests, each running as its own future over the same
//! shared collaborators.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config_store::{ConfigStore, ProjectConfig};
use crate::context_cache::ContextCache;
use crate::downstream::{DownstreamPayload, DownstreamQueue};
use crate::fingerprint::{FingerprintError, FingerprintResult, FingerprintService};
use crate::metrics::{
    CONTEXT_RENDEZVOUS_MISSES, CONTEXT_RENDEZVOUS_WAITS, INGEST_DURATION, INGEST_OUTCOMES,
    PERSIST_FAILURES,
};
use crate::metrics_store::MetricsStore;

use super::config::IngestorConfig;
use super::error::IngestError;
use super::types::{IngestionOutcome, IngestionRequest};

/// The metrics ingestion orchestrator.
///
/// One instance serves many concurrent requests. Collaborators are injected
/// as shared trait objects; no per-request state outlives a call to
/// [`Ingestor::ingest`].
pub struct Ingestor {
    config: IngestorConfig,
    config_store: Arc<dyn ConfigStore>,
    context_cache: Arc<dyn ContextCache>,
    fingerprint_service: Arc<dyn FingerprintService>,
    metrics_store: Arc<dyn MetricsStore>,
    downstream: Arc<dyn DownstreamQueue>,
}

impl Ingestor {
    /// Creates a new orchestrator over the given collaborators.
    pub fn new(
        config: IngestorConfig,
        config_store: Arc<dyn ConfigStore>,
        context_cache: Arc<dyn ContextCache>,
        fingerprint_service: Arc<dyn FingerprintService>,
        metrics_store: Arc<dyn MetricsStore>,
        downstream: Arc<dyn DownstreamQueue>,
    ) -> Self {
        Self {
            config,
            config_store,
            context_cache,
            fingerprint_service,
            metrics_store,
            downstream,
        }
    }

    /// Ingests one metrics submission.
    ///
    /// `request_body` is a JSON document with at least `project_id` and
    /// `metrics`, optionally a `trace_id`. Collaborator faults are translated
    /// into [`IngestionOutcome`] variants; only malformed input, a missing
    /// project configuration and downstream forwarding surface as `Err`.
    ///
    /// Invariant: the success outcome claims durability (`persisted == true`)
    /// if and only if the metrics store confirmed the write.
    pub async fn ingest(&self, request_body: &str) -> Result<IngestionOutcome, IngestError> {
        let start = Instant::now();
        let result = self.run(request_body).await;

        let label = match &result {
            Ok(outcome) => outcome.result_label(),
            Err(IngestError::InvalidInput(_)) => "invalid_input",
            Err(IngestError::ConfigUnavailable(_)) => "config_unavailable",
            Err(IngestError::DownstreamFailed(_)) => "downstream_failed",
        };
        INGEST_OUTCOMES.with_label_values(&[label]).inc();
        INGEST_DURATION
            .with_label_values(&[label])
            .observe(start.elapsed().as_secs_f64());

        result
    }

    async fn run(&self, request_body: &str) -> Result<IngestionOutcome, IngestError> {
        // Candidate values. The request id is only committed to the caller
        // according to the outcome rules below.
        let request_id = Uuid::new_v4().to_string();
        let received_at = Utc::now();

        let request = parse_request(request_body)?;
        debug!(
            %request_id,
            project_id = %request.project_id,
            trace_id = ?request.trace_id,
            "request received"
        );

        let project = self
            .config_store
            .get_project_config(&request.project_id)
            .await?;
        if !project.enabled {
            warn!(%request_id, project_id = %request.project_id, "project disabled");
            return Ok(IngestionOutcome::Disabled {
                project_id: request.project_id,
                error: "disabled".to_string(),
            });
        }

        let context = self.resolve_context(&request, &project, &request_id).await;

        let fingerprint_id = match self.compute_fingerprint(&request, &project).await {
            Ok(result) => result.fingerprint_id,
            Err(e) => {
                error!(
                    %request_id,
                    project_id = %request.project_id,
                    error = %e,
                    "failed to call fingerprint service"
                );
                // Not retried. Nothing was persisted, so the request id is
                // surfaced for correlation only.
                return Ok(IngestionOutcome::InferenceFailed {
                    project_id: request.project_id,
                    request_id,
                    error: "inference failed".to_string(),
                });
            }
        };

        let persisted = match self
            .metrics_store
            .save_fingerprint(
                &request_id,
                &request.project_id,
                &fingerprint_id,
                &request.metrics,
                received_at,
            )
            .await
        {
            Ok(()) => true,
            Err(e) => {
                // Best-effort durability: the failure is recorded and exposed
                // through `persisted`, but the pipeline keeps going.
                error!(
                    %request_id,
                    project_id = %request.project_id,
                    error = %e,
                    "failed to save fingerprint"
                );
                PERSIST_FAILURES.inc();
                false
            }
        };

        let payload = DownstreamPayload {
            request_id: request_id.clone(),
            received_at,
            project_id: request.project_id.clone(),
            trace_id: request.trace_id.clone(),
            fingerprint_id: fingerprint_id.clone(),
            metrics: request.metrics.clone(),
            context,
        };

        // No timeout, no retry. A failure here fails the whole request.
        self.downstream.upload(&request.project_id, &payload).await?;

        info!(
            %request_id,
            project_id = %request.project_id,
            %fingerprint_id,
            persisted,
            "metrics ingestion complete"
        );

        Ok(IngestionOutcome::Completed {
            project_id: request.project_id,
            request_id,
            fingerprint_id,
            persisted,
        })
    }

    /// Resolves out-of-band context for the request.
    ///
    /// On a miss the producer gets exactly one bounded grace period of
    /// `context_wait`, then the lookup is retried once. A second miss is
    /// benign and yields the empty context.
    async fn resolve_context(
        &self,
        request: &IngestionRequest,
        project: &ProjectConfig,
        request_id: &str,
    ) -> Map<String, Value> {
        let Some(trace_id) = request.trace_id.as_deref() else {
            return Map::new();
        };

        let key = self.config.context_key(trace_id);
        debug!(%request_id, %key, "context lookup");
        let mut raw = self.context_cache.get(&key).await;

        if raw.is_none() {
            info!(
                %request_id,
                %key,
                wait_ms = project.context_wait_ms,
                "waiting for missing context"
            );
            CONTEXT_RENDEZVOUS_WAITS.inc();
            tokio::time::sleep(project.context_wait()).await;
            raw = self.context_cache.get(&key).await;
        }

        match raw {
            Some(raw) => match serde_json::from_str::<Map<String, Value>>(&raw) {
                Ok(context) => context,
                Err(e) => {
                    warn!(
                        %request_id,
                        %key,
                        error = %e,
                        "cached context is not a JSON object, ignoring"
                    );
                    Map::new()
                }
            },
            None => {
                CONTEXT_RENDEZVOUS_MISSES.inc();
                Map::new()
            }
        }
    }

    /// Calls the fingerprint service under the per-project timeout.
    ///
    /// The bound is enforced here as well as advertised to the service, so a
    /// misbehaving implementation cannot stall the request. Elapsing is
    /// indistinguishable from a remote error.
    async fn compute_fingerprint(
        &self,
        request: &IngestionRequest,
        project: &ProjectConfig,
    ) -> Result<FingerprintResult, FingerprintError> {
        let timeout = project.inference_timeout();
        match tokio::time::timeout(
            timeout,
            self.fingerprint_service
                .fingerprint(&request.project_id, &request.metrics, timeout),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(FingerprintError::Timeout),
        }
    }
}

/// Decodes and validates a request body.
fn parse_request(request_body: &str) -> Result<IngestionRequest, IngestError> {
    let request: IngestionRequest =
        serde_json::from_str(request_body).map_err(|e| IngestError::InvalidInput(e.to_string()))?;

    if request.project_id.is_empty() {
        return Err(IngestError::InvalidInput(
            "project_id must not be empty".to_string(),
        ));
    }

    Ok(request)
}
