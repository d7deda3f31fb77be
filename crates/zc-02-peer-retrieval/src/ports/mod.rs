//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (API exposed to the lookup path)
//! - `outbound.rs` - Driven ports (peer transport the host must provide)

pub mod inbound;
pub mod outbound;
