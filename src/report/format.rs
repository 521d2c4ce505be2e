//! Console formatting.
//!
//! Each import produces exactly one line; the batch ends with a summary line.

use std::fmt::Write as _;

use crate::domain::{ImportJob, ImportReport, RowError};
use crate::error::ImportError;

use super::{BatchSummary, JobOutcome};

pub fn format_outcome(outcome: &JobOutcome) -> String {
    match &outcome.result {
        Ok(report) => format_report(report, &outcome.job),
        Err(err) => format_failure(&outcome.job, err),
    }
}

pub fn format_report(report: &ImportReport, job: &ImportJob) -> String {
    let mut line = if report.inserted > 0 {
        format!(
            "Inserted {} from {} for {}",
            counted(report.inserted, "product"),
            report.file.display(),
            vendor_label(job)
        )
    } else {
        format!(
            "No products to insert from {} for {}",
            report.file.display(),
            vendor_label(job)
        )
    };
    if report.skipped_count() > 0 {
        let _ = write!(line, ", skipped {}", counted(report.skipped_count(), "row"));
    }
    line
}

pub fn format_failure(job: &ImportJob, err: &ImportError) -> String {
    format!(
        "Error processing {} for {}: {err}",
        job.file.display(),
        vendor_label(job)
    )
}

pub fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "{}/{} imports succeeded, {} inserted, {} skipped",
        summary.succeeded(),
        summary.outcomes.len(),
        counted(summary.inserted(), "product"),
        counted(summary.skipped(), "row")
    )
}

/// Indented list of skipped rows, one per line.
pub fn format_row_errors(errors: &[RowError]) -> String {
    let mut out = String::new();
    for e in errors {
        let _ = writeln!(out, "  line {}: {}", e.line, e.message);
    }
    out
}

/// `1 row`, `2 rows`, `0 rows`.
fn counted(n: usize, noun: &str) -> String {
    if n == 1 { format!("1 {noun}") } else { format!("{n} {noun}s") }
}

fn vendor_label(job: &ImportJob) -> String {
    match &job.label {
        Some(label) => format!("vendor {} ({label})", job.vendor),
        None => format!("vendor {}", job.vendor),
    }
}
