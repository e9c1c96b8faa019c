//! Core domain types for auractl
//!
//! This module contains the error hierarchy, the crate-wide `Result` alias,
//! and the identifier newtypes shared by the exporter and the prober.

pub mod errors;
pub mod ids;
pub mod result;

pub use errors::AuraError;
pub use ids::BookId;
pub use result::Result;
