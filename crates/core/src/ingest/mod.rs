//! Metrics ingestion orchestrator.
//!
//! Sequences one submission through configuration lookup, context
//! rendezvous, fingerprint computation, persistence and downstream fan-out.
//! The one invariant that must hold across every failure path: a request id
//! is only claimed as durably recorded once the metrics store confirmed the
//! write.

mod config;
mod error;
mod orchestrator;
mod types;

pub use config::IngestorConfig;
pub use error::IngestError;
pub use orchestrator::Ingestor;
pub use types::{IngestionOutcome, IngestionRequest};
