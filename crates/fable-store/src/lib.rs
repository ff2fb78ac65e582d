//! Client-side persistence for the Fable skin manager.
//!
//! A [`KvStore`] is a minimal single-key string store: the analog of the
//! browser's localStorage. [`LocalStore`] layers the skin-document
//! contract on top -- fingerprint scoping, lazy invalidation, and
//! whole-document atomic writes.

mod file;
mod local;
mod memory;

pub use file::FileStore;
pub use local::{LocalStore, STORAGE_KEY};
pub use memory::MemoryStore;

use fable_types::Result;

/// A persistent string-keyed, string-valued store.
///
/// Implementations must make `put` atomic per key: a reader never
/// observes a partially written value.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is
    /// not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
