//! Fingerprint-scoped local store adapter.
//!
//! Wraps a [`KvStore`] with the skin-document contract: the document is
//! read and written whole under a single storage key, and data recorded
//! for a different session fingerprint is treated as absent (lazy
//! invalidation) rather than explicitly evicted.

use fable_types::{Result, SkinDocument, SkinError};

use crate::KvStore;

/// Storage key the skin document lives under.
pub const STORAGE_KEY: &str = "fable-skins";

/// Local store adapter for the skin document.
#[derive(Debug)]
pub struct LocalStore<S> {
    store: S,
    storage_key: String,
    fingerprint: Option<String>,
}

impl<S: KvStore> LocalStore<S> {
    /// Wrap `store`, scoping all reads and writes to `fingerprint`.
    ///
    /// `fingerprint` is `None` when logged out; loads then return the
    /// empty default and saves are refused.
    pub fn new(store: S, fingerprint: Option<String>) -> Self {
        Self::with_storage_key(store, STORAGE_KEY, fingerprint)
    }

    /// Like [`LocalStore::new`] with a custom storage key.
    pub fn with_storage_key(
        store: S,
        storage_key: impl Into<String>,
        fingerprint: Option<String>,
    ) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            fingerprint,
        }
    }

    /// Current session fingerprint, if logged in.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Read the skin document.
    ///
    /// Never fails: missing, unparsable, or stale (wrong-fingerprint)
    /// data all yield the empty default document for the current
    /// session.
    pub fn load(&self) -> SkinDocument {
        let current = self.fingerprint.as_deref().unwrap_or("");
        let raw = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SkinDocument::empty(current),
            Err(e) => {
                log::warn!("skin store read failed: {e}");
                return SkinDocument::empty(current);
            },
        };
        match SkinDocument::from_json(&raw) {
            Ok(doc) if doc.belongs_to(current) => doc,
            Ok(doc) => {
                log::debug!(
                    "stored skin document belongs to another session ({}), using empty default",
                    doc.fingerprint
                );
                SkinDocument::empty(current)
            },
            Err(e) => {
                log::warn!("stored skin document is corrupt: {e}");
                SkinDocument::empty(current)
            },
        }
    }

    /// Persist the skin document, overwriting the stored copy.
    ///
    /// Refuses documents scoped to a different session (or saves while
    /// logged out) with [`SkinError::WrongFingerprint`] and performs no
    /// write.
    pub fn save(&mut self, doc: &SkinDocument) -> Result<()> {
        let current = self.fingerprint.as_deref().unwrap_or("");
        if !doc.belongs_to(current) {
            log::warn!("refusing to persist skin document for a different session");
            return Err(SkinError::WrongFingerprint);
        }
        let json = doc.to_json()?;
        self.store.put(&self.storage_key, &json)
    }

    /// Access the underlying store.
    pub fn inner(&self) -> &S {
        &self.store
    }
}
