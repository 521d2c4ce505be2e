//! Domain types used throughout the importer.
//!
//! This module defines:
//!
//! - the product document (`ProductRecord`) and its cell types (`CellValue`, `Numeric`)
//! - the caller-supplied vendor identifier (`VendorId`)
//! - import jobs and their outcomes (`ImportJob`, `ImportReport`, `RowError`)

pub mod types;

pub use types::*;
