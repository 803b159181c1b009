//! Output file naming and writing.

pub mod filename;
pub mod output;

pub use output::{write_document, write_messages, Written};
