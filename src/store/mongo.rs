//! Remote product collection over the native MongoDB driver.

use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::sync::{Client, Collection};
use tracing::debug;

use crate::config::{Backend, ConnectionSettings};
use crate::domain::{ProductRecord, VendorId};
use crate::error::{AppError, EXIT_STORE, StoreError};

use super::ProductStore;

const APP_NAME: &str = "catalog-import";

pub struct MongoStore {
    collection: Collection<ProductRecord>,
}

impl MongoStore {
    /// Build a client for `settings`. No round trip happens until the first request.
    pub fn connect(settings: &ConnectionSettings) -> Result<Self, AppError> {
        let Backend::Mongo { uri } = &settings.backend else {
            return Err(AppError::new(EXIT_STORE, "Connection settings do not describe a MongoDB URI."));
        };

        let options = client_options(uri, settings.timeout)
            .map_err(|e| AppError::new(EXIT_STORE, format!("Invalid MongoDB connection string: {e}")))?;
        let client = Client::with_options(options)
            .map_err(|e| AppError::new(EXIT_STORE, format!("Failed to build MongoDB client: {e}")))?;

        let collection = client
            .database(&settings.database)
            .collection::<ProductRecord>(&settings.collection);
        Ok(Self { collection })
    }
}

/// Parse `uri` and bound connecting and server selection by `timeout`.
///
/// Server selection is the wait that hangs when the cluster is unreachable,
/// so it gets the same limit as the connect itself.
fn client_options(uri: &str, timeout: Duration) -> Result<ClientOptions, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).run()?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);
    if options.app_name.is_none() {
        options.app_name = Some(APP_NAME.to_string());
    }
    Ok(options)
}

fn vendor_filter(vendor: &VendorId) -> Document {
    doc! { "vendor": vendor.as_str() }
}

impl ProductStore for MongoStore {
    fn insert_many(&self, records: &[ProductRecord]) -> Result<usize, StoreError> {
        debug!(collection = %self.collection.name(), count = records.len(), "insert_many");
        let result = self.collection.insert_many(records).run()?;
        Ok(result.inserted_ids.len())
    }

    fn find_by_vendor(&self, vendor: &VendorId) -> Result<Vec<ProductRecord>, StoreError> {
        debug!(collection = %self.collection.name(), %vendor, "find");
        let cursor = self.collection.find(vendor_filter(vendor)).run()?;
        let records = cursor.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
