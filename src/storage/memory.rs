//! In-memory key/value store.

use super::{Storage, StorageError};
use std::collections::HashMap;
use tracing::debug;

/// HashMap-backed store for tests and ephemeral sessions.
///
/// The `fail_writes` switch turns every write into an error, which is how
/// the fail-soft persistence contract gets exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Seeds a value directly, bypassing the failure switch.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Returns the stored value, for assertions on persisted content.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::new("writes disabled"));
        }
        self.values.insert(key.to_string(), value.to_string());
        debug!(key, "Value stored");
        Ok(())
    }
}
