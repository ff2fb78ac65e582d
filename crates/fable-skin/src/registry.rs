//! Skin registry: the mutation surface over the persisted document.
//!
//! Every operation is a whole-document read-modify-write through the
//! [`LocalStore`]: load, mutate the in-memory copy, save. Loading
//! already replaces stale (wrong-fingerprint) data with the empty
//! default, so the registry inherits the lazy invalidation model.

use fable_store::{KvStore, LocalStore};
use fable_types::{MAX_CSS_BYTES, Result, SkinDocument, SkinError, SkinRecord};

use crate::key::encode_key;
use crate::validator::{extract_metadata, is_well_formed_css};

/// Registry of a user's uploaded skins.
#[derive(Debug)]
pub struct SkinRegistry<S> {
    local: LocalStore<S>,
}

impl<S: KvStore> SkinRegistry<S> {
    pub fn new(local: LocalStore<S>) -> Self {
        Self { local }
    }

    /// The backing local store.
    pub fn local(&self) -> &LocalStore<S> {
        &self.local
    }

    /// Mutable access to the backing local store (used by the manager
    /// when accepting a pulled remote document).
    pub fn local_mut(&mut self) -> &mut LocalStore<S> {
        &mut self.local
    }

    /// Current skin document (empty default when logged out or stale).
    pub fn document(&self) -> SkinDocument {
        self.local.load()
    }

    /// Validate and store a new skin from its CSS text.
    ///
    /// Returns the registry key on success. A name colliding with an
    /// existing key overwrites that record; the capacity check runs
    /// first, so no upload is accepted once the document is full.
    pub fn add_skin(&mut self, css: &str) -> Result<String> {
        if self.local.fingerprint().is_none() {
            return Err(SkinError::WrongFingerprint);
        }
        let mut doc = self.local.load();
        if doc.at_capacity() {
            return Err(SkinError::TooManySkins);
        }
        if css.len() > MAX_CSS_BYTES {
            return Err(SkinError::FileTooLarge(css.len()));
        }
        if !is_well_formed_css(css) {
            return Err(SkinError::InvalidCss);
        }
        let meta = extract_metadata(css);
        let Some(name) = meta.name else {
            return Err(SkinError::MissingMetadata);
        };

        let key = encode_key(&name);
        doc.data.insert(
            key.clone(),
            SkinRecord {
                name,
                author: meta.author,
                version: meta.version,
                css: css.to_string(),
            },
        );
        self.local.save(&doc)?;
        log::info!("skin added under key {key}");
        Ok(key)
    }

    /// Toggle the active skin.
    ///
    /// Activating a key deactivates whatever was active before (single
    /// active invariant); toggling the active key clears the selection.
    /// An absent key leaves the selection untouched. The document is
    /// persisted either way.
    pub fn toggle_active(&mut self, key: &str) -> Result<()> {
        if self.local.fingerprint().is_none() {
            return Err(SkinError::WrongFingerprint);
        }
        let mut doc = self.local.load();
        if doc.data.contains_key(key) {
            doc.active = if doc.active.as_deref() == Some(key) {
                None
            } else {
                Some(key.to_string())
            };
        }
        self.local.save(&doc)
    }

    /// Remove a skin. Deleting the active skin clears the selection;
    /// deleting an absent key is a no-op (idempotent).
    pub fn delete_skin(&mut self, key: &str) -> Result<()> {
        if self.local.fingerprint().is_none() {
            return Err(SkinError::WrongFingerprint);
        }
        let mut doc = self.local.load();
        doc.data.remove(key);
        if doc.active.as_deref() == Some(key) {
            doc.active = None;
        }
        self.local.save(&doc)
    }
}
