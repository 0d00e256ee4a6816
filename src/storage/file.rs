//! File-backed key/value store.

use super::{Storage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Key/value store keeping one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory is created lazily on the first write, so pointing at
    /// a missing directory reads as empty rather than failing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        info!(dir = %dir.display(), "Creating FileStore");
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "Key not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        debug!(key, "Value persisted");
        Ok(())
    }
}
