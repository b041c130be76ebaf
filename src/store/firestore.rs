//! Firestore REST backend for the pantry store.
//!
//! Talks to the Firestore v1 document API with plain JSON over HTTPS.
//! Each record is a document in the configured collection whose id is
//! the item name and whose single field is an integer `count`.

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::PantryStore;
use crate::config::Config;
use crate::models::PantryItem;

/// Default endpoint of the hosted Firestore v1 API.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Pantry store backed by a hosted Firestore project.
///
/// Authenticates with the project's web API key, passed as a `key`
/// query parameter on every request. The base URL can be pointed at
/// an emulator through [`Config::base_url`].
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    collection: String,
    api_key: String,
}

/// Firestore's JSON encoding of an integer field value.
///
/// Integers travel as decimal strings on the wire.
#[derive(Debug, Serialize, Deserialize)]
struct IntegerValue {
    #[serde(rename = "integerValue")]
    integer_value: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CountFields {
    count: IntegerValue,
}

/// A document as returned by get/list: full resource path plus fields.
#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    fields: Option<CountFields>,
}

/// Body sent on writes: fields only, the id lives in the URL.
#[derive(Debug, Serialize)]
struct WriteBody {
    fields: CountFields,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

impl FirestoreStore {
    /// Creates a store client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            collection: config.collection.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// URL of the collection, without the trailing key parameter.
    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, self.collection
        )
    }

    /// URL of a single document, id percent-encoded.
    fn document_url(&self, name: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(name))
    }

    fn with_key(&self, url: String) -> String {
        format!("{}?key={}", url, self.api_key)
    }

    /// Converts a non-success response into a `StoreError::Status`.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl PantryStore for FirestoreStore {
    async fn list_all(&self) -> Result<Vec<PantryItem>, StoreError> {
        let url = self.with_key(self.collection_url());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let list: ListResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let mut items = Vec::with_capacity(list.documents.len());
        for doc in &list.documents {
            items.push(decode_document(doc)?);
        }
        tracing::debug!("Listed {} pantry record(s)", items.len());
        Ok(items)
    }

    async fn get(&self, name: &str) -> Result<Option<PantryItem>, StoreError> {
        let url = self.with_key(self.document_url(name));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!("Record '{}' not found", name);
            return Ok(None);
        }
        let response = Self::check_status(response).await?;

        let doc: Document = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        decode_document(&doc).map(Some)
    }

    async fn put(&self, name: &str, count: u32) -> Result<(), StoreError> {
        let url = self.with_key(self.document_url(name));
        let body = WriteBody {
            fields: CountFields {
                count: IntegerValue {
                    integer_value: count.to_string(),
                },
            },
        };

        // PATCH upserts: Firestore creates the document if it is absent.
        let response = self
            .client
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;
        Self::check_status(response).await?;
        tracing::debug!("Wrote record '{}' with count {}", name, count);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let url = self.with_key(self.document_url(name));
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        // Firestore reports success for absent documents; some emulators
        // answer 404 instead, which callers tolerate the same way.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        Self::check_status(response).await?;
        tracing::debug!("Deleted record '{}'", name);
        Ok(())
    }
}

/// Extracts a `PantryItem` from a Firestore document.
///
/// The document id is the last segment of the resource path.
fn decode_document(doc: &Document) -> Result<PantryItem, StoreError> {
    let name = doc
        .name
        .rsplit_once('/')
        .map(|(_, id)| id)
        .unwrap_or(&doc.name);
    let fields = doc
        .fields
        .as_ref()
        .ok_or_else(|| StoreError::Decode(format!("document '{}' has no fields", name)))?;
    let count = fields
        .count
        .integer_value
        .parse::<u32>()
        .map_err(|e| StoreError::Decode(format!("bad count for '{}': {}", name, e)))?;
    Ok(PantryItem::new(name, count))
}
