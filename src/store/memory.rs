//! # In-Memory Document Store
//!
//! Process-local collections behind a single lock. Used by the test suite
//! and by `docrest serve --memory` for running without a database.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::document::{apply_patch, matches_filter, Document, Filter};
use super::errors::{StoreError, StoreResult};
use super::{CollectionHandle, DocumentStore};

type Collections = Arc<RwLock<HashMap<String, Vec<Document>>>>;

/// In-memory store: collection name -> documents in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Collections,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|data| data.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn collection(&self, name: &str) -> Box<dyn CollectionHandle> {
        Box::new(MemoryCollection {
            name: name.to_string(),
            collections: Arc::clone(&self.collections),
        })
    }

    async fn disconnect(&self) {}
}

struct MemoryCollection {
    name: String,
    collections: Collections,
}

#[async_trait]
impl CollectionHandle for MemoryCollection {
    async fn find_all(&self) -> StoreResult<Vec<Document>> {
        let data = self
            .collections
            .read()
            .map_err(|_| StoreError::Query("Lock poisoned".to_string()))?;

        Ok(data.get(&self.name).cloned().unwrap_or_default())
    }

    async fn insert_one(&self, mut doc: Document) -> StoreResult<()> {
        if !doc.contains_key("_id") {
            doc.insert("_id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }

        let mut data = self
            .collections
            .write()
            .map_err(|_| StoreError::Insert("Lock poisoned".to_string()))?;

        data.entry(self.name.clone()).or_default().push(doc);
        Ok(())
    }

    async fn update_one(&self, filter: Filter, patch: Document) -> StoreResult<u64> {
        let mut data = self
            .collections
            .write()
            .map_err(|_| StoreError::Update("Lock poisoned".to_string()))?;

        let target = data
            .get_mut(&self.name)
            .and_then(|docs| docs.iter_mut().find(|d| matches_filter(d, &filter)));

        match target {
            Some(doc) => {
                apply_patch(doc, &patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, filter: Filter) -> StoreResult<u64> {
        let mut data = self
            .collections
            .write()
            .map_err(|_| StoreError::Delete("Lock poisoned".to_string()))?;

        let Some(docs) = data.get_mut(&self.name) else {
            return Ok(0);
        };

        match docs.iter().position(|d| matches_filter(d, &filter)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
