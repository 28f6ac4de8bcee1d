//! File-backed preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

type OriginMap = BTreeMap<String, BTreeMap<String, String>>;

/// A [`PreferenceStore`] persisted as JSON on disk.
///
/// One file can hold preferences for several sites; each store instance
/// only sees the entries of its own origin:
///
/// ```json
/// {
///   "https://example.org": { "colorScheme": "dark" },
///   "http://localhost:8080": { "colorScheme": "light" }
/// }
/// ```
///
/// A missing file reads as empty. A malformed file fails reads with
/// [`StoreError::Format`], but the next write replaces it. Writes go to a
/// sibling temporary file that is then renamed over the original, so a
/// crash mid-write never leaves a truncated store behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    origin: String,
}

impl FileStore {
    /// Creates a store for `origin` backed by the file at `path`.
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>, origin: &str) -> Self {
        Self {
            path: path.into(),
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the origin this store is scoped to.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn read_all(&self) -> Result<OriginMap, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(OriginMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(OriginMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, map: &OriginMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let json = serde_json::to_string_pretty(map)?;
        let written = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.read_all()?;
        Ok(map
            .get(&self.origin)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = match self.read_all() {
            Ok(map) => map,
            Err(StoreError::Format(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "replacing malformed preference file");
                OriginMap::new()
            }
            Err(err) => return Err(err),
        };
        map.entry(self.origin.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.write_all(&map)?;
        tracing::debug!(path = %self.path.display(), origin = %self.origin, key, "stored preference");
        Ok(())
    }
}
