//! In-memory store, mainly for tests.

use super::{KeyValueStore, StoreError};
use std::collections::HashMap;

/// Store that keeps values in a map and forgets them on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn save_all(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}
