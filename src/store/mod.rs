//! # Document Store
//!
//! The single long-lived database handle shared by every request handler.
//!
//! A [`DocumentStore`] hands out lazy [`CollectionHandle`]s; the handle
//! exposes exactly the primitives the HTTP layer needs. Two backends exist:
//!
//! - [`MongoStore`] - the production backend, one driver session per process
//! - [`MemoryStore`] - process-local collections for tests and local runs

pub mod document;
pub mod errors;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;

pub use document::{Document, Filter, UpdateSpec};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// A handle to one named collection
///
/// Collections need not exist beforehand; the backend creates them on
/// first write.
#[async_trait]
pub trait CollectionHandle: Send + Sync {
    /// Return every document in the collection
    async fn find_all(&self) -> StoreResult<Vec<Document>>;

    /// Insert a document as-is
    async fn insert_one(&self, doc: Document) -> StoreResult<()>;

    /// Set the fields of `patch` on the first document matching `filter`
    ///
    /// Returns the number of matched documents; zero is not an error.
    async fn update_one(&self, filter: Filter, patch: Document) -> StoreResult<u64>;

    /// Delete the first document matching `filter`
    ///
    /// Returns the number of deleted documents; zero is not an error.
    async fn delete_one(&self, filter: Filter) -> StoreResult<u64>;
}

/// Process-wide document database handle
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Resolve a collection within the configured database. Never fails.
    fn collection(&self, name: &str) -> Box<dyn CollectionHandle>;

    /// Release the underlying session
    async fn disconnect(&self);
}
