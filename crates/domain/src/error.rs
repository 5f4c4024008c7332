//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`UserbaseError`] via `#[from]`. Storage failures are boxed so the domain
//! stays free of driver types.

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum UserbaseError {
    /// Client input was rejected before reaching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Client input that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field required at creation time is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A path identifier is not a valid integer id.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The request payload could not be decoded.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Lookup by identifier matched no record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
