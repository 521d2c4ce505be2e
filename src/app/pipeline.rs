//! Import pipeline shared by every CLI command.
//!
//! One job: load -> map (bad rows skipped) -> single bulk write -> report.
//! A batch runs its jobs in order and never stops at a failed one.

use std::path::Path;

use tracing::{error, info, warn};

use crate::domain::{ImportJob, ImportReport, VendorId};
use crate::error::ImportError;
use crate::io::ingest::{MappedCatalog, load_catalog};
use crate::report::{BatchSummary, JobOutcome};
use crate::store::ProductStore;

/// Import one vendor price list into `store`.
///
/// Returns the number of records the store confirmed plus every skipped row.
/// Nothing is written when no row maps.
pub fn import_vendor_catalog(
    store: &dyn ProductStore,
    file: &Path,
    vendor: &VendorId,
) -> Result<ImportReport, ImportError> {
    let catalog = load_catalog(file, vendor)?;
    write_catalog(store, file, vendor, catalog)
}

fn write_catalog(
    store: &dyn ProductStore,
    file: &Path,
    vendor: &VendorId,
    catalog: MappedCatalog,
) -> Result<ImportReport, ImportError> {
    let MappedCatalog {
        records,
        row_errors,
        rows_read,
    } = catalog;

    for e in &row_errors {
        warn!(file = %file.display(), line = e.line, "skipping row: {}", e.message);
    }

    let inserted = if records.is_empty() {
        0
    } else {
        store.insert_many(&records).map_err(|source| ImportError::Write {
            file: file.to_path_buf(),
            vendor: vendor.clone(),
            source,
        })?
    };

    Ok(ImportReport {
        file: file.to_path_buf(),
        vendor: vendor.clone(),
        rows_read,
        inserted,
        skipped: row_errors,
    })
}

/// Run every job in order, printing one line per outcome.
pub fn run_batch(store: &dyn ProductStore, jobs: &[ImportJob]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for job in jobs {
        info!(file = %job.file.display(), vendor = %job.vendor, "importing");

        let result = import_vendor_catalog(store, &job.file, &job.vendor);
        match &result {
            Ok(report) => info!(
                file = %job.file.display(),
                vendor = %job.vendor,
                inserted = report.inserted,
                skipped = report.skipped_count(),
                "import finished"
            ),
            Err(err) => error!(file = %job.file.display(), vendor = %job.vendor, "import failed: {err}"),
        }

        let outcome = JobOutcome {
            job: job.clone(),
            result,
        };
        println!("{}", crate::report::format_outcome(&outcome));
        summary.outcomes.push(outcome);
    }

    summary
}
