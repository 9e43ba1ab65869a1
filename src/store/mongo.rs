//! # MongoDB Document Store
//!
//! One driver session per process, opened at startup and verified with a
//! `ping`. The driver owns pooling and timeouts.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document as BsonDocument};
use mongodb::{Client, Collection, Database};
use serde_json::Value;

use super::document::{Document, Filter};
use super::errors::{StoreError, StoreResult};
use super::{CollectionHandle, DocumentStore};

/// MongoDB-backed store bound to a single logical database
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Open a session and confirm the server answers
    ///
    /// No retry: callers treat failure as fatal.
    pub async fn connect(uri: &str, database: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        let database = client.database(database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        tracing::info!(
            event = "STORE_CONNECTED",
            database = database.name(),
            "connected to MongoDB"
        );

        Ok(Self { client, database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn collection(&self, name: &str) -> Box<dyn CollectionHandle> {
        Box::new(MongoCollection {
            inner: self.database.collection::<BsonDocument>(name),
        })
    }

    async fn disconnect(&self) {
        self.client.clone().shutdown().await;
        tracing::info!(event = "STORE_DISCONNECTED", "MongoDB session closed");
    }
}

struct MongoCollection {
    inner: Collection<BsonDocument>,
}

#[async_trait]
impl CollectionHandle for MongoCollection {
    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let cursor = self
            .inner
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let docs: Vec<BsonDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(docs.into_iter().map(bson_to_document).collect())
    }

    async fn insert_one(&self, doc: Document) -> StoreResult<()> {
        let doc = document_to_bson(&doc).map_err(StoreError::Insert)?;
        self.inner
            .insert_one(doc)
            .await
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Ok(())
    }

    async fn update_one(&self, filter: Filter, patch: Document) -> StoreResult<u64> {
        let filter = document_to_bson(&filter).map_err(StoreError::Update)?;
        let patch = document_to_bson(&patch).map_err(StoreError::Update)?;

        let result = self
            .inner
            .update_one(filter, doc! { "$set": patch })
            .await
            .map_err(|e| StoreError::Update(e.to_string()))?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: Filter) -> StoreResult<u64> {
        let filter = document_to_bson(&filter).map_err(StoreError::Delete)?;

        let result = self
            .inner
            .delete_one(filter)
            .await
            .map_err(|e| StoreError::Delete(e.to_string()))?;
        Ok(result.deleted_count)
    }
}

/// Encode a JSON object as BSON
fn document_to_bson(doc: &Document) -> Result<BsonDocument, String> {
    bson::to_document(doc).map_err(|e| e.to_string())
}

/// Decode a BSON document into JSON
///
/// Object ids become their hex string; everything else uses relaxed
/// extended JSON.
fn bson_to_document(doc: BsonDocument) -> Document {
    doc.into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => Value::Object(bson_to_document(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
