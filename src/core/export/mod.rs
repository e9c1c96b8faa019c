//! Collection export pipeline
//!
//! - [`convert`] - BSON to JSON-safe value conversion
//! - [`writer`] - pretty-printed JSON array output
//! - [`runner`] - connect/ping/read/convert/write coordination

pub mod convert;
pub mod runner;
pub mod writer;

pub use convert::{convert_bson, convert_document};
pub use runner::run_export;
pub use writer::write_export_file;
