use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use enhancer_core::repository::{ReadRepository, Repository, Result};
use enhancer_core::{Identifier, RedirectEntry, StorageError};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its locks, so reads and writes on different buckets do not
/// block each other. Inserts go through the entry API, which holds the shard's
/// write lock across the membership check and the insert.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<Identifier, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<RedirectEntry>> {
        Ok(self
            .storage
            .get(key)
            .map(|found| RedirectEntry::new(found.key().clone(), found.value().clone())))
    }

    async fn len(&self) -> usize {
        self.storage.len()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, entry: RedirectEntry) -> Result<()> {
        match self.storage.entry(entry.identifier) {
            Entry::Occupied(occupied) => Err(StorageError::Conflict(occupied.key().to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(entry.target_url);
                Ok(())
            }
        }
    }
}
