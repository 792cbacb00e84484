use crate::error::Result;
use crate::identifier::Identifier;
use async_trait::async_trait;

/// Key allocation and URL resolution.
#[async_trait]
pub trait RedirectStore: Send + Sync + 'static {
    /// Allocates a fresh identifier for `target_url` and commits the mapping.
    ///
    /// Fails with `Validation` on an empty URL and `KeySpaceExhausted` when
    /// no free identifier was found within the retry ceiling.
    async fn allocate(&self, target_url: &str) -> Result<Identifier>;

    /// Resolves `identifier` to the URL it was allocated for.
    ///
    /// Fails with `Validation` on an empty identifier and `NotFound` when the
    /// identifier was never issued.
    async fn resolve(&self, identifier: &str) -> Result<String>;
}
