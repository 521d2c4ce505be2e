//! Reporting: per-import outcomes and the batch summary.

use crate::domain::{ImportJob, ImportReport};
use crate::error::ImportError;

pub mod format;

pub use format::*;

/// Result of one job in a batch.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: ImportJob,
    pub result: Result<ImportReport, ImportError>,
}

/// Outcomes of every job in a batch, in run order.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn inserted(&self) -> usize {
        self.reports().map(|r| r.inserted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.reports().map(ImportReport::skipped_count).sum()
    }

    /// 0 when every job succeeded, else the most severe failure's exit code.
    pub fn exit_code(&self) -> u8 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err())
            .map(ImportError::exit_code)
            .max()
            .unwrap_or(0)
    }

    fn reports(&self) -> impl Iterator<Item = &ImportReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }
}
