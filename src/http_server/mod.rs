//! # HTTP Server Module
//!
//! Generic CRUD over caller-named collections.
//!
//! # Endpoints
//!
//! - `GET /filter?filter={collection}` - list every document
//! - `POST /{collection}/create` - insert a document
//! - `GET /{collection}/view` - list every document
//! - `PUT /{collection}/update` - set fields on the first match
//! - `DELETE /{collection}/delete` - remove the first match

pub mod collection_routes;
pub mod config;
pub mod cors;
pub mod errors;
pub mod server;

pub use collection_routes::{collection_routes, CollectionState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{shutdown_signal, HttpServer};
