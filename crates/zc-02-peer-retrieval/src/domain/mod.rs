//! # Domain Layer
//!
//! - `errors` - Transport and peer errors
//! - `metrics` - Retrieval counters

pub mod errors;
pub mod metrics;
