//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (publish, retract, fetch)
//! - `outbound.rs` - Driven ports (state engine, naming rules, storage backend)

pub mod inbound;
pub mod outbound;
