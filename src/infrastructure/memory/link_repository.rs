//! In-memory implementation of [`LinkRepository`].

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::LinkRecord;
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;

/// DashMap-backed link storage.
///
/// Insertion goes through the entry API, which holds the shard write lock
/// across the occupancy check and the insert. Reads only take the shard
/// read lock. Nothing is ever removed: expired records keep their code.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, LinkRecord>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Creates a repository with room for `capacity` records before rehashing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: DashMap::with_capacity(capacity),
        }
    }
}

impl LinkRepository for InMemoryLinkRepository {
    fn insert_if_absent(&self, record: LinkRecord) -> Result<(), StoreError> {
        match self.links.entry(record.code.clone()) {
            Entry::Occupied(existing) => Err(StoreError::ShortcodeConflict {
                code: existing.key().clone(),
            }),
            Entry::Vacant(slot) => {
                debug!(code = %record.code, "Inserted link record");
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn find_by_code(&self, code: &str) -> Option<LinkRecord> {
        self.links.get(code).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}
