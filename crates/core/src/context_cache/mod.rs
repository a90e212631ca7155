//! Context cache consumed at the rendezvous point.
//!
//! An out-of-band producer writes enrichment context keyed by trace id.
//! Lookups never fail; absence is an ordinary return value, usually a benign
//! race with the producer.

mod traits;

pub use traits::ContextCache;
