//! Prometheus metrics for the ingestion pipeline.

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Ingestion requests total by result.
pub static INGEST_OUTCOMES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pulse_ingest_requests_total", "Total ingestion requests"),
        // "completed", "completed_unpersisted", "disabled", "inference_failed",
        // "invalid_input", "config_unavailable", "downstream_failed"
        &["result"],
    )
    .unwrap()
});

/// Ingestion duration in seconds.
pub static INGEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pulse_ingest_duration_seconds",
            "End-to-end duration of one ingestion request",
        )
        .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        &["result"],
    )
    .unwrap()
});

/// Context rendezvous waits performed (first lookup missed).
pub static CONTEXT_RENDEZVOUS_WAITS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "pulse_context_rendezvous_waits_total",
        "Requests that waited once for out-of-band context",
    )
    .unwrap()
});

/// Context still missing after the bounded wait.
pub static CONTEXT_RENDEZVOUS_MISSES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "pulse_context_rendezvous_misses_total",
        "Requests that proceeded with empty context after the bounded wait",
    )
    .unwrap()
});

/// Persistence failures that did not abort the request.
pub static PERSIST_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "pulse_persist_failures_total",
        "Metrics store writes that failed after a successful fingerprint",
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(INGEST_OUTCOMES.clone()),
        Box::new(INGEST_DURATION.clone()),
        Box::new(CONTEXT_RENDEZVOUS_WAITS.clone()),
        Box::new(CONTEXT_RENDEZVOUS_MISSES.clone()),
        Box::new(PERSIST_FAILURES.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
    }
}
