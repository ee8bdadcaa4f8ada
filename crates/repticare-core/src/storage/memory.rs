//! In-memory persistence adapter.
//!
//! Used by tests and by callers that do not need durability. Writes can be
//! forced to fail to exercise the store's rollback path.

use std::collections::HashMap;

use crate::error::{RepticareError, Result};
use crate::storage::traits::{CollectionKey, Persistence};

#[derive(Debug, Default, Clone)]
pub struct MemoryPersistence {
    slots: HashMap<CollectionKey, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw contents for `key`, e.g. to simulate corrupt data.
    pub fn with_raw(mut self, key: CollectionKey, contents: impl Into<String>) -> Self {
        self.slots.insert(key, contents.into());
        self
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw contents currently stored for `key`.
    pub fn raw(&self, key: CollectionKey) -> Option<&str> {
        self.slots.get(&key).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Persistence for MemoryPersistence {
    fn read(&self, key: CollectionKey) -> Result<Option<String>> {
        Ok(self.slots.get(&key).cloned())
    }

    fn write(&mut self, key: CollectionKey, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(RepticareError::PersistenceWrite {
                key: key.to_string(),
                reason: "storage quota exceeded".to_string(),
            });
        }
        self.slots.insert(key, contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
