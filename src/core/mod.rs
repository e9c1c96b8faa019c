//! Business logic
//!
//! - [`export`] - collection export pipeline
//! - [`probe`] - API probe scenario

pub mod export;
pub mod probe;
