//! External integrations
//!
//! - [`mongo`] - MongoDB connection and collection reads for the exporter
//! - [`api`] - HTTP probe client for the EbookAura API

pub mod api;
pub mod mongo;
