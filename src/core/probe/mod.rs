//! API probe scenario
//!
//! - [`scenario`] - the fixed probe sequence and its summary
//! - [`preview`] - one-line body previews
//! - [`report`] - colored transcript output

pub mod preview;
pub mod report;
pub mod scenario;

pub use preview::BodyPreview;
pub use scenario::{
    run_scenario, AuthPhase, CredentialSource, Credentials, NoCredentials, ScenarioSummary,
};
