//! File-backed persistence adapter.
//!
//! Each collection lives in `<data_dir>/<key>.json`. Writes go through
//! [`crate::fs::write_atomic`], so a crash mid-save leaves the previous
//! collection intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{RepticareError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::{CollectionKey, Persistence};

#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    /// Use `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: CollectionKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Persistence for FilePersistence {
    fn read(&self, key: CollectionKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(RepticareError::PersistenceRead {
                    key: key.to_string(),
                    reason: format!("{}: {}", path.display(), err),
                })
            }
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|err| RepticareError::PersistenceCorrupt {
                key: key.to_string(),
                reason: format!("{}: {}", path.display(), err),
            })
    }

    fn write(&mut self, key: CollectionKey, contents: &str) -> Result<()> {
        let path = self.path_for(key);
        let write_err = |err: io::Error| RepticareError::PersistenceWrite {
            key: key.to_string(),
            reason: format!("{}: {}", path.display(), err),
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;
        write_atomic(&path, contents.as_bytes()).map_err(write_err)
    }
}
