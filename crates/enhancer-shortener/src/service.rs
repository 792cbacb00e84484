use async_trait::async_trait;
use enhancer_core::error::Result;
use enhancer_core::{Identifier, RedirectEntry, RedirectStore, Repository, StorageError, StoreError};
use enhancer_generator::Generator;
use std::sync::Arc;
use tracing::{debug, error, trace};
use typed_builder::TypedBuilder;

/// Ceiling on candidates tried by a single allocation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

const MISSING_URL: &str = "URL parameter is missing";
const MISSING_KEY: &str = "key is missing";

/// Tunables for the allocation loop.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct AllocationSettings {
    /// How many candidates to try before giving up with `KeySpaceExhausted`.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `RedirectStore` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Input validation
/// - Candidate generation with collision retry
/// - Resolution of issued identifiers
///
/// Uniqueness is enforced by the repository's atomic insert; a candidate
/// that collides is discarded and a new one is drawn.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: AllocationSettings,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default allocation settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, AllocationSettings::default())
    }

    pub fn with_settings(repository: R, generator: G, settings: AllocationSettings) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            settings,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, G: Generator> RedirectStore for ShortenerService<R, G> {
    async fn allocate(&self, target_url: &str) -> Result<Identifier> {
        if target_url.is_empty() {
            return Err(StoreError::Validation(MISSING_URL.to_string()));
        }

        for attempt in 1..=self.settings.max_attempts {
            let candidate = self.generator.generate();
            let entry = RedirectEntry::new(candidate.clone(), target_url);

            match self.repository.insert(entry).await {
                Ok(()) => {
                    debug!(key = %candidate, attempt, "allocated key");
                    return Ok(candidate);
                }
                Err(StorageError::Conflict(_)) => {
                    debug!(key = %candidate, attempt, "key collision, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }

        error!(
            attempts = self.settings.max_attempts,
            "no free key found within the retry ceiling"
        );
        Err(StoreError::KeySpaceExhausted {
            attempts: self.settings.max_attempts,
        })
    }

    async fn resolve(&self, identifier: &str) -> Result<String> {
        if identifier.is_empty() {
            return Err(StoreError::Validation(MISSING_KEY.to_string()));
        }

        trace!(key = %identifier, "resolving key");

        match self.repository.get(identifier).await? {
            Some(entry) => Ok(entry.target_url),
            None => {
                trace!(key = %identifier, "key not found");
                Err(StoreError::NotFound(identifier.to_string()))
            }
        }
    }
}
