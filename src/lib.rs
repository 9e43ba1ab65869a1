//! docrest - a generic REST facade over a document database
//!
//! Create, view, update and delete documents in caller-named collections.
//! No schema, no business logic: each request maps to one store call.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod store;
