//! MongoDB adapter

pub mod client;

pub use client::MongoExporter;
