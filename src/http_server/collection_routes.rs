//! Collection HTTP Routes
//!
//! One handler per verb. Each resolves the target collection, makes exactly
//! one store call and renders the outcome.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::store::{CollectionHandle, Document, DocumentStore, Filter, UpdateSpec};

use super::errors::{ApiError, ApiResult};

pub const CREATED_MESSAGE: &str = "Product added successfully";
pub const UPDATED_MESSAGE: &str = "Product updated successfully";
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

// ==================
// Shared State
// ==================

/// State shared across handlers: the process-wide store handle
#[derive(Clone)]
pub struct CollectionState {
    pub store: Arc<dyn DocumentStore>,
}

impl CollectionState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

// ==================
// Collection Routes
// ==================

/// Create collection routes
pub fn collection_routes(state: CollectionState) -> Router {
    Router::new()
        .route("/filter", get(filter_handler))
        .route("/:collection/create", post(create_handler))
        .route("/:collection/view", get(view_handler))
        .route("/:collection/update", put(update_handler))
        .route("/:collection/delete", delete(delete_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Map a caller-supplied name to a collection handle
///
/// The name is used verbatim; only emptiness is rejected.
pub fn resolve_collection(
    store: &dyn DocumentStore,
    name: Option<&str>,
) -> ApiResult<Box<dyn CollectionHandle>> {
    match name {
        Some(name) if !name.is_empty() => Ok(store.collection(name)),
        _ => Err(ApiError::MissingCollection),
    }
}

fn decode_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(e.to_string()))
}

async fn list_documents(collection: Box<dyn CollectionHandle>) -> ApiResult<Json<Vec<Document>>> {
    let docs = collection.find_all().await?;
    Ok(Json(docs))
}

// ==================
// Handlers
// ==================

async fn filter_handler(
    State(state): State<CollectionState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Json<Vec<Document>>> {
    let collection = resolve_collection(state.store.as_ref(), query.filter.as_deref())?;
    list_documents(collection).await
}

async fn view_handler(
    State(state): State<CollectionState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Vec<Document>>> {
    let collection = resolve_collection(state.store.as_ref(), Some(&name))?;
    list_documents(collection).await
}

async fn create_handler(
    State(state): State<CollectionState>,
    Path(name): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, &'static str)> {
    let doc: Document = decode_body(&body)?;
    let collection = resolve_collection(state.store.as_ref(), Some(&name))?;

    collection.insert_one(doc).await?;
    Ok((StatusCode::CREATED, CREATED_MESSAGE))
}

async fn update_handler(
    State(state): State<CollectionState>,
    Path(name): Path<String>,
    body: Bytes,
) -> ApiResult<&'static str> {
    let spec: UpdateSpec = decode_body(&body)?;
    let collection = resolve_collection(state.store.as_ref(), Some(&name))?;

    let matched = collection.update_one(spec.filter, spec.update).await?;
    tracing::debug!(event = "DOCUMENT_UPDATED", collection = %name, matched);
    Ok(UPDATED_MESSAGE)
}

async fn delete_handler(
    State(state): State<CollectionState>,
    Path(name): Path<String>,
    body: Bytes,
) -> ApiResult<&'static str> {
    let filter: Filter = decode_body(&body)?;
    let collection = resolve_collection(state.store.as_ref(), Some(&name))?;

    let deleted = collection.delete_one(filter).await?;
    tracing::debug!(event = "DOCUMENT_DELETED", collection = %name, deleted);
    Ok(DELETED_MESSAGE)
}
