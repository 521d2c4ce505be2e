//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - builds the destination store once and lends it to every import
//! - turns the batch outcome into the process exit code

use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::cli::{CheckArgs, Command, ImportArgs, ListArgs, RunArgs, StoreArgs};
use crate::config::{ConnectionSettings, Manifest};
use crate::domain::{ImportJob, VendorId};
use crate::error::{AppError, EXIT_STORE};
use crate::report::BatchSummary;
use crate::store::{MemoryStore, ProductStore};

pub mod pipeline;

/// Entry point for the `catalog-import` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init();

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Import(args) => handle_import(args),
        Command::Check(args) => handle_check(args),
        Command::List(args) => handle_list(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let manifest = Manifest::load(&args.manifest)?;
    info!(jobs = manifest.jobs.len(), manifest = %args.manifest.display(), "loaded manifest");
    run_jobs(&manifest.jobs, &args.store)
}

fn handle_import(args: ImportArgs) -> Result<(), AppError> {
    let job = ImportJob::new(args.file, VendorId::new(args.vendor));
    run_jobs(std::slice::from_ref(&job), &args.store)
}

fn run_jobs(jobs: &[ImportJob], store_args: &StoreArgs) -> Result<(), AppError> {
    let summary = if store_args.dry_run {
        let store = MemoryStore::new();
        pipeline::run_batch(&store, jobs)
    } else {
        let store = remote_store(store_args.timeout_secs)?;
        pipeline::run_batch(&*store, jobs)
    };

    println!("{}", crate::report::format_summary(&summary));
    finish(&summary)
}

fn finish(summary: &BatchSummary) -> Result<(), AppError> {
    match summary.exit_code() {
        0 => Ok(()),
        code => Err(AppError::new(
            code,
            format!("{} of {} imports failed.", summary.failed(), summary.outcomes.len()),
        )),
    }
}

fn handle_check(args: CheckArgs) -> Result<(), AppError> {
    let vendor = VendorId::new(args.vendor);
    let catalog = crate::io::ingest::load_catalog(&args.file, &vendor)?;

    println!(
        "{}: {} rows read, {} would be inserted, {} skipped",
        args.file.display(),
        catalog.rows_read,
        catalog.records.len(),
        catalog.row_errors.len()
    );
    print!("{}", crate::report::format_row_errors(&catalog.row_errors));

    if let Some(path) = &args.export {
        crate::io::export::write_records_json(path, &catalog.records)?;
        info!(path = %path.display(), records = catalog.records.len(), "exported mapped records");
    }
    Ok(())
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let store = remote_store(args.timeout_secs)?;
    let vendor = VendorId::new(args.vendor);
    let records = store
        .find_by_vendor(&vendor)
        .map_err(|e| AppError::new(EXIT_STORE, format!("Failed to read products for vendor {vendor}: {e}")))?;

    for record in &records {
        let line = serde_json::to_string(record)
            .map_err(|e| AppError::new(EXIT_STORE, format!("Failed to encode product: {e}")))?;
        println!("{line}");
    }
    info!(vendor = %vendor, count = records.len(), "listed products");
    Ok(())
}

fn remote_store(timeout_secs: Option<u64>) -> Result<Box<dyn ProductStore>, AppError> {
    let mut settings = ConnectionSettings::from_env()?;
    if let Some(secs) = timeout_secs {
        settings.timeout = Duration::from_secs(secs);
    }
    crate::store::connect(&settings)
}
