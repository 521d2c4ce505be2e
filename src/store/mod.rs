//! Destination stores for product documents.
//!
//! The importer only ever needs two operations, so the store is a small trait
//! that the pipeline borrows as `&dyn ProductStore`:
//!
//! - `mongo`: the remote collection, over the native driver
//! - `data_api`: the same collection, over an HTTP document API
//! - `memory`: an in-process collection for dry runs and tests

use tracing::info;

use crate::config::{Backend, ConnectionSettings};
use crate::domain::{ProductRecord, VendorId};
use crate::error::{AppError, StoreError};

pub mod data_api;
pub mod memory;
pub mod mongo;

pub use data_api::DataApiStore;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

pub trait ProductStore {
    /// Insert all records in one bulk write and return how many the store confirmed.
    ///
    /// On error, none of the records may be assumed inserted.
    fn insert_many(&self, records: &[ProductRecord]) -> Result<usize, StoreError>;

    /// Fetch every record tagged with `vendor`.
    fn find_by_vendor(&self, vendor: &VendorId) -> Result<Vec<ProductRecord>, StoreError>;
}

/// Build the remote store the settings point at.
pub fn connect(settings: &ConnectionSettings) -> Result<Box<dyn ProductStore>, AppError> {
    info!(
        database = %settings.database,
        collection = %settings.collection,
        timeout_secs = settings.timeout.as_secs(),
        "connecting to product store"
    );
    match &settings.backend {
        Backend::Mongo { .. } => Ok(Box::new(MongoStore::connect(settings)?)),
        Backend::DataApi { .. } => Ok(Box::new(DataApiStore::new(settings)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn connect_builds_either_backend_without_a_round_trip() {
        let mut settings = ConnectionSettings {
            backend: Backend::Mongo {
                uri: "mongodb://localhost:27017".to_string(),
            },
            database: "ai-procurement".to_string(),
            collection: "vendorproducts".to_string(),
            timeout: Duration::from_secs(1),
        };
        assert!(connect(&settings).is_ok());

        settings.backend = Backend::DataApi {
            base_url: "https://data.example.net/endpoint/data/v1".to_string(),
            api_key: "k".to_string(),
            data_source: "Cluster0".to_string(),
        };
        assert!(connect(&settings).is_ok());
    }
}
