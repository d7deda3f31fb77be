//! # Zonefile Test Suite
//!
//! Cross-crate scenarios that no single subsystem crate can exercise alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── properties.rs   # Cache, peer and authorization guarantees
//!     └── flows.rs        # Node-level lookup and batch flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p zc-tests
//! cargo test -p zc-tests integration::flows::
//! ```

pub mod integration;
