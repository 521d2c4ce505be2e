//! `vendor-catalog-import` library crate.
//!
//! The binary (`catalog-import`) is a thin wrapper around this library so that:
//!
//! - the import pipeline is testable without spawning processes
//! - the destination store can be swapped (remote collection, in-memory)

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod store;
