//! # Domain Layer
//!
//! - `errors` - Bridge error taxonomy
//! - `naming` - Default naming rules

pub mod errors;
pub mod naming;
