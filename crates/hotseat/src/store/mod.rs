//! Key-value persistence.
//!
//! Values are opaque strings, mirroring what a browser's local storage
//! offers: set a value under a key, read it back after a restart.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-to-string store that outlives the process.
pub trait KeyValueStore {
    /// Reads the value under `key`, `None` when nothing was saved.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Writes every entry or none of them.
    fn save_all(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError>;
}
