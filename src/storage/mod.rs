//! Key-value storage for persisted preferences.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: The storage seam used by the controller
//! - [`MemoryStore`]: In-process storage with optional quota, for tests and embedding
//! - [`FileStore`]: A JSON file holding one key-value map per origin
//! - [`StoreError`]: Errors from reading or writing a store
//!
//! Stores behave like a browser's origin-scoped local storage: values are
//! strings, reads of a missing key return `Ok(None)`, and writes replace any
//! previous value.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Error returned when a store cannot be read or written.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage is disabled or not present in this environment
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The write would exceed the store's quota
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// A string key-value store scoped to one site origin.
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
