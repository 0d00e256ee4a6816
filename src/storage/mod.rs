//! Durable key/value storage backends.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Durable key/value storage.
///
/// Values are opaque strings; serialization formats live one layer up.
/// Writes replace any previous value under the key.
pub trait Storage {
    /// Reads the value under `key`, `None` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
