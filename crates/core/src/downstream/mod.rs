//! Downstream fan-out queue.

mod error;
mod traits;
mod types;

pub use error::QueueError;
pub use traits::DownstreamQueue;
pub use types::DownstreamPayload;
