pub mod config;
pub mod config_store;
pub mod context_cache;
pub mod downstream;
pub mod fingerprint;
pub mod ingest;
pub mod metrics;
pub mod metrics_store;
pub mod testing;

pub use config::{load_config, load_config_from_str, Config, ConfigError};
pub use config_store::{ConfigStore, ConfigStoreError, ProjectConfig};
pub use context_cache::ContextCache;
pub use downstream::{DownstreamPayload, DownstreamQueue, QueueError};
pub use fingerprint::{FingerprintError, FingerprintResult, FingerprintService};
pub use ingest::{IngestError, IngestionOutcome, IngestionRequest, Ingestor, IngestorConfig};
pub use metrics_store::{MetricsStore, MetricsStoreError};
