//! Command-line parsing for the vendor catalog importer.
//!
//! Parsing lives here; dispatch lives in `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "catalog-import",
    version,
    about = "Import vendor pricing spreadsheets into the product collection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run every import listed in a TOML manifest.
    Run(RunArgs),
    /// Import a single price list for one vendor.
    Import(ImportArgs),
    /// Map a price list and report what would be written, without writing.
    Check(CheckArgs),
    /// Print every stored product for a vendor as JSON lines.
    List(ListArgs),
}

/// Options shared by commands that talk to the store.
#[derive(Debug, Args, Clone)]
pub struct StoreArgs {
    /// Map and count, but write to an in-memory store instead of the remote collection.
    #[arg(long)]
    pub dry_run: bool,

    /// Per-request timeout in seconds (overrides CATALOG_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Manifest with one `[[import]]` table per (file, vendor) pair.
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Price list CSV.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Vendor id to tag every product with.
    #[arg(long)]
    pub vendor: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Price list CSV.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Vendor id to tag products with in the export.
    #[arg(long, default_value = "unassigned")]
    pub vendor: String,

    /// Write the mapped records to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Vendor id to look up.
    #[arg(long)]
    pub vendor: String,

    /// Per-request timeout in seconds (overrides CATALOG_TIMEOUT_SECS).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}
