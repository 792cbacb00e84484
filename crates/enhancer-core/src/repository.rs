use crate::entry::RedirectEntry;
use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
///
/// Lookups take a plain `&str` so that keys never issued by a generator
/// can still be looked up (and reported as missing).
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the entry stored under `key`.
    /// Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<RedirectEntry>>;

    /// Number of committed entries.
    async fn len(&self) -> usize;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new entry if its identifier is free.
    ///
    /// The membership check and the insert happen as one atomic step.
    /// Returns `Err(Conflict)` if the identifier is already taken, leaving
    /// the existing entry untouched.
    async fn insert(&self, entry: RedirectEntry) -> Result<()>;
}
