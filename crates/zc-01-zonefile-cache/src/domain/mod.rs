//! # Domain Layer
//!
//! Pure domain types for the zonefile cache.
//!
//! - `config` - Cache configuration passed in at construction
//! - `errors` - Domain error types
//! - `sweep` - Result of a full cache sweep

pub mod config;
pub mod errors;
pub mod sweep;
