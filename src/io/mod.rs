//! Input/output helpers.
//!
//! - CSV ingest + row mapping (`ingest`)
//! - mapped-record JSON export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
