//! In-memory preference store.

use std::collections::HashMap;

use super::{PreferenceStore, StoreError};

/// A [`PreferenceStore`] kept in process memory.
///
/// Besides plain storage, it can simulate the failure modes of browser
/// storage: a byte quota (counted over keys and values, like local storage)
/// and storage that is disabled entirely. It also counts successful writes
/// so callers can assert that a read-only path wrote nothing.
///
/// # Example
///
/// ```rust
/// use colorscheme::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::new().with_entry("colorScheme", "light");
/// assert_eq!(store.get("colorScheme").unwrap().as_deref(), Some("light"));
///
/// store.set("colorScheme", "dark").unwrap();
/// assert_eq!(store.writes(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    unavailable: bool,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty, unlimited store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every read and write fails with [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Limits the total size of stored keys and values, in bytes.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Seeds an entry without counting it as a write.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Removes every entry, like clearing site data.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn used_bytes_with(&self, key: &str, value: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_with(key, value);
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
