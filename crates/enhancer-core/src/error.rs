use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a repository backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("identifier already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Caller-facing outcome of `allocate` and `resolve`.
///
/// Every variant maps to a distinct response class at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Caller input is missing or malformed.
    #[error("{0}")]
    Validation(String),
    /// The identifier was never issued by this store.
    #[error("key not found: {0}")]
    NotFound(String),
    /// The allocation loop hit its retry ceiling without finding a free key.
    #[error("key space exhausted after {attempts} attempts")]
    KeySpaceExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Whether the failure was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Validation(_) | StoreError::NotFound(_))
    }
}
