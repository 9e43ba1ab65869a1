//! # HTTP Errors
//!
//! Every failure is answered with a fixed plain-text message for its call
//! site. Driver detail goes to the log, never to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// `filter` query parameter missing or empty
    #[error("Collection name is required")]
    MissingCollection,

    /// Body did not decode into the expected JSON shape
    #[error("Invalid input")]
    InvalidInput(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("Failed to fetch data")]
    Fetch(StoreError),

    #[error("Failed to decode data")]
    Decode(StoreError),

    #[error("Failed to insert data")]
    Insert(StoreError),

    #[error("Failed to update data")]
    Update(StoreError),

    #[error("Failed to delete data")]
    Delete(StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCollection | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_)
            | ApiError::Decode(_)
            | ApiError::Insert(_)
            | ApiError::Update(_)
            | ApiError::Delete(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode(_) => ApiError::Decode(err),
            StoreError::Insert(_) => ApiError::Insert(err),
            StoreError::Update(_) => ApiError::Update(err),
            StoreError::Delete(_) => ApiError::Delete(err),
            StoreError::Query(_) | StoreError::Connect(_) => ApiError::Fetch(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidInput(detail) => {
                tracing::debug!(event = "REQUEST_REJECTED", error = %detail);
            }
            ApiError::MissingCollection => {
                tracing::debug!(event = "REQUEST_REJECTED", error = %self);
            }
            ApiError::Fetch(cause)
            | ApiError::Decode(cause)
            | ApiError::Insert(cause)
            | ApiError::Update(cause)
            | ApiError::Delete(cause) => {
                tracing::error!(event = cause.event(), error = %cause);
            }
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
