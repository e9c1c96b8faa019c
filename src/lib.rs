// auractl - EbookAura Operations Toolkit
// Copyright (c) 2026 Auractl Contributors
// Licensed under the MIT License

//! # auractl - EbookAura operations toolkit
//!
//! Two small operational tools for the EbookAura service behind one CLI:
//!
//! - **Export**: one-shot dump of a MongoDB collection to a pretty-printed
//!   JSON file, converting object identifiers to hex strings and timestamps
//!   to ISO-8601 strings.
//! - **Probe**: a sequential smoke test of the HTTP API that prints
//!   color-coded pass/fail results, with an optional interactive login to
//!   exercise authenticated routes.
//!
//! Both tools are deliberately single-pass: no retries, no concurrency, no
//! persisted state beyond the export file.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export pipeline, probe scenario)
//! - [`adapters`] - External integrations (MongoDB, EbookAura API)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use auractl::config::load_config;
//! use auractl::core::export::run_export;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("auractl.toml")?;
//!     let count = run_export(&config).await?;
//!     println!("Exported {count} documents");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with the
//! [`domain::AuraError`] enum. Probe execution is the exception by design:
//! per-probe failures are folded into a failed
//! [`adapters::api::ProbeOutcome`] so a smoke-test run always reaches its
//! summary.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
