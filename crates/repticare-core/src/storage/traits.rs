//! Persistence adapter trait definition.
//!
//! The `Persistence` trait is the store's only window onto durable storage.
//! Backends implement two raw primitives over whole-collection text blobs;
//! the typed `load`/`save` operations are provided on top of them.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{RepticareError, Result};

/// Stable storage keys, one per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Reptiles,
    Entries,
}

impl CollectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKey::Reptiles => "reptiles",
            CollectionKey::Entries => "entries",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for whole collections.
///
/// Implementations must ensure:
/// - `read` returns `Ok(None)` for a key that was never written
/// - `write` replaces the full contents stored under the key
/// - a failed `write` is reported, never swallowed
pub trait Persistence {
    /// Read the raw stored contents for `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::PersistenceRead` if the backend cannot be read.
    fn read(&self, key: CollectionKey) -> Result<Option<String>>;

    /// Replace the raw stored contents for `key`.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::PersistenceWrite` if the backend rejects the write.
    fn write(&mut self, key: CollectionKey, contents: &str) -> Result<()>;

    /// Load the collection saved under `key`.
    ///
    /// Returns `Ok(None)` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::PersistenceCorrupt` if the stored data does not parse.
    fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Result<Option<Vec<T>>>
    where
        Self: Sized,
    {
        let Some(raw) = self.read(key)? else {
            tracing::debug!(key = %key, "no stored collection");
            return Ok(None);
        };

        let items: Vec<T> =
            serde_json::from_str(&raw).map_err(|e| RepticareError::PersistenceCorrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        tracing::debug!(key = %key, count = items.len(), "loaded collection");
        Ok(Some(items))
    }

    /// Overwrite the collection saved under `key` with `items`.
    fn save<T: Serialize>(&mut self, key: CollectionKey, items: &[T]) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(items).map_err(|e| RepticareError::PersistenceWrite {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.write(key, &raw)?;
        tracing::debug!(key = %key, count = items.len(), bytes = raw.len(), "saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys_are_stable() {
        assert_eq!(CollectionKey::Reptiles.as_str(), "reptiles");
        assert_eq!(CollectionKey::Entries.to_string(), "entries");
    }

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_persistence<T: Persistence>(_adapter: T) {}
    }
}
