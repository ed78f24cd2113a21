//! JSON-file backed store.

use super::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Store persisting all keys as one JSON object on disk.
///
/// The file is re-read on every load and rewritten on every save,
/// through a temporary sibling file renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                StoreError::new(format!(
                    "Failed to parse store file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store file missing, treating as empty");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(StoreError::new(format!(
                "Failed to read store file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self, values), fields(path = %self.path.display(), keys = values.len()))]
    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, serde_json::to_string_pretty(values)?)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("Store file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.save_all(&[(key, value)])
    }

    fn save_all(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        let mut values = self.read_all()?;
        for (key, value) in entries {
            values.insert(key.to_string(), value.to_string());
        }
        self.write_all(&values)
    }
}
