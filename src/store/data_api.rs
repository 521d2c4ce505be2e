//! Remote product collection over an HTTP document API.
//!
//! Speaks the Atlas-style Data API: every action is a `POST {base}/action/{name}`
//! whose JSON body names the data source, database and collection.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Backend, ConnectionSettings};
use crate::domain::{ProductRecord, VendorId};
use crate::error::{AppError, EXIT_STORE, StoreError};

use super::ProductStore;

pub struct DataApiStore {
    client: Client,
    base_url: String,
    api_key: String,
    data_source: String,
    database: String,
    collection: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertManyRequest<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    documents: &'a [ProductRecord],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertManyResponse {
    inserted_ids: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FindRequest<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    filter: VendorFilter<'a>,
}

#[derive(Debug, Serialize)]
struct VendorFilter<'a> {
    vendor: &'a VendorId,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    documents: Vec<ProductRecord>,
}

impl DataApiStore {
    pub fn new(settings: &ConnectionSettings) -> Result<Self, AppError> {
        let Backend::DataApi {
            base_url,
            api_key,
            data_source,
        } = &settings.backend
        else {
            return Err(AppError::new(EXIT_STORE, "Connection settings do not describe a Data API endpoint."));
        };

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AppError::new(EXIT_STORE, format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.clone(),
            api_key: api_key.clone(),
            data_source: data_source.clone(),
            database: settings.database.clone(),
            collection: settings.collection.clone(),
        })
    }

    fn action_url(&self, action: &str) -> String {
        format!("{}/action/{action}", self.base_url)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, action: &str, body: &B) -> Result<T, StoreError> {
        let url = self.action_url(action);
        debug!(%url, "data api request");

        let resp = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()?;

        decode_response(resp)
    }
}

fn decode_response<T: DeserializeOwned>(resp: Response) -> Result<T, StoreError> {
    let status = resp.status();
    let body = resp.text()?;
    if !status.is_success() {
        return Err(StoreError::Status {
            status: status.as_u16(),
            body,
        });
    }
    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
}

impl ProductStore for DataApiStore {
    fn insert_many(&self, records: &[ProductRecord]) -> Result<usize, StoreError> {
        let request = InsertManyRequest {
            data_source: &self.data_source,
            database: &self.database,
            collection: &self.collection,
            documents: records,
        };
        let resp: InsertManyResponse = self.post("insertMany", &request)?;
        Ok(resp.inserted_ids.len())
    }

    fn find_by_vendor(&self, vendor: &VendorId) -> Result<Vec<ProductRecord>, StoreError> {
        let request = FindRequest {
            data_source: &self.data_source,
            database: &self.database,
            collection: &self.collection,
            filter: VendorFilter { vendor },
        };
        let resp: FindResponse = self.post("find", &request)?;
        Ok(resp.documents)
    }
}
