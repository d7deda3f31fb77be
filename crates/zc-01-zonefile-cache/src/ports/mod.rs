//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (API exposed to lookup and publish paths)

pub mod inbound;
