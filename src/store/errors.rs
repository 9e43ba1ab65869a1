//! # Document Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
///
/// One variant per driver call, so the HTTP layer can pick the right
/// response message without inspecting driver internals.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The database was unreachable at startup
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The match-all query could not be issued
    #[error("Query failed: {0}")]
    Query(String),

    /// Query results could not be read back
    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Insert failed: {0}")]
    Insert(String),

    #[error("Update failed: {0}")]
    Update(String),

    #[error("Delete failed: {0}")]
    Delete(String),
}

impl StoreError {
    /// Stable event name used when the error is logged
    pub fn event(&self) -> &'static str {
        match self {
            StoreError::Connect(_) => "STORE_CONNECT_FAILED",
            StoreError::Query(_) => "STORE_QUERY_FAILED",
            StoreError::Decode(_) => "STORE_DECODE_FAILED",
            StoreError::Insert(_) => "STORE_INSERT_FAILED",
            StoreError::Update(_) => "STORE_UPDATE_FAILED",
            StoreError::Delete(_) => "STORE_DELETE_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_driver_message() {
        let err = StoreError::Insert("duplicate key".to_string());
        assert_eq!(err.to_string(), "Insert failed: duplicate key");
    }

    #[test]
    fn test_event_names() {
        assert_eq!(StoreError::Query(String::new()).event(), "STORE_QUERY_FAILED");
        assert_eq!(StoreError::Decode(String::new()).event(), "STORE_DECODE_FAILED");
        assert_eq!(StoreError::Delete(String::new()).event(), "STORE_DELETE_FAILED");
    }
}
