//! Error types.
//!
//! - `AppError`: what the binary reports (message + process exit code)
//! - `ImportError`: why a single (file, vendor) import failed
//! - `StoreError`: why the destination store rejected a request
//!
//! Row-level mapping failures are not errors at this level; they are collected
//! as `domain::RowError` and reported alongside the inserted count.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::VendorId;

/// Exit code for bad input: configuration, manifest, or an unloadable file.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for destination store failures.
pub const EXIT_STORE: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

/// Why a catalog file could not be loaded at all.
#[derive(Debug, Error)]
pub enum LoadErrorKind {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read CSV header: {0}")]
    Header(#[from] csv::Error),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Failure of one (file, vendor) import. Never aborts the rest of a batch.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to load '{}': {source}", .file.display())]
    Load {
        file: PathBuf,
        #[source]
        source: LoadErrorKind,
    },
    #[error("bulk write of '{}' for vendor {vendor} failed: {source}", .file.display())]
    Write {
        file: PathBuf,
        vendor: VendorId,
        #[source]
        source: StoreError,
    },
}

impl ImportError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ImportError::Load { .. } => EXIT_INPUT,
            ImportError::Write { .. } => EXIT_STORE,
        }
    }
}

/// Destination store failure. No rows of the rejected batch count as inserted.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("store responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode store response: {0}")]
    Decode(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_errors_map_to_exit_codes() {
        let load = ImportError::Load {
            file: PathBuf::from("missing.csv"),
            source: LoadErrorKind::MissingColumns(vec!["Cost".to_string(), "Model".to_string()]),
        };
        assert_eq!(load.exit_code(), EXIT_INPUT);
        assert_eq!(
            load.to_string(),
            "failed to load 'missing.csv': missing required column(s): Cost, Model"
        );

        let write = ImportError::Write {
            file: PathBuf::from("a.csv"),
            vendor: VendorId::new("v1"),
            source: StoreError::Rejected("read-only".to_string()),
        };
        let app: AppError = write.into();
        assert_eq!(app.exit_code(), EXIT_STORE);
        assert_eq!(
            app.to_string(),
            "bulk write of 'a.csv' for vendor v1 failed: write rejected: read-only"
        );
    }
}
