//! EbookAura API adapter

pub mod client;
pub mod session;

pub use client::{is_success_status, ApiProber, Probe, ProbeMethod, ProbeOutcome};
pub use session::ProbeSession;
