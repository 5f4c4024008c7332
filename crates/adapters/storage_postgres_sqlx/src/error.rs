//! Storage-specific error type wrapping sqlx errors.

use userbase_domain::error::UserbaseError;

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for UserbaseError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
