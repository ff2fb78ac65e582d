//! Persisted skin document model.
//!
//! A `SkinDocument` is the single unit of persistence: one JSON object
//! holding every skin a user has uploaded, which one (if any) is active,
//! and the session fingerprint the data belongs to. The document is only
//! ever read and written whole; partial field updates would risk lost
//! updates across event handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum number of skins a document may hold.
pub const MAX_SKINS: usize = 3;

/// Maximum size of a single skin's CSS payload in bytes.
pub const MAX_CSS_BYTES: usize = 200_000;

/// One user-uploaded skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinRecord {
    /// Human-readable name, source of the registry key.
    pub name: String,
    /// Optional free-text author.
    #[serde(default)]
    pub author: Option<String>,
    /// Optional free-text version.
    #[serde(default)]
    pub version: Option<String>,
    /// Full CSS payload.
    pub css: String,
}

/// The persisted skin document.
///
/// `data` is a `BTreeMap`, so iteration (and therefore list rendering)
/// is deterministic key-sorted order across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinDocument {
    /// Opaque session identity the document is scoped to.
    pub fingerprint: String,
    /// Key of the currently applied skin, if any.
    #[serde(default)]
    pub active: Option<String>,
    /// Skin records keyed by the encoded skin name.
    #[serde(default)]
    pub data: BTreeMap<String, SkinRecord>,
}

impl SkinDocument {
    /// The default empty document for a session.
    pub fn empty(fingerprint: &str) -> Self {
        Self {
            fingerprint: fingerprint.to_string(),
            active: None,
            data: BTreeMap::new(),
        }
    }

    /// Whether this document belongs to the given session fingerprint.
    ///
    /// An empty fingerprint never matches: a logged-out session has no
    /// identity to scope data to.
    pub fn belongs_to(&self, fingerprint: &str) -> bool {
        !fingerprint.is_empty() && self.fingerprint == fingerprint
    }

    /// Whether the single-active and capacity invariants hold.
    pub fn is_consistent(&self) -> bool {
        self.data.len() <= MAX_SKINS
            && match &self.active {
                Some(key) => self.data.contains_key(key),
                None => true,
            }
    }

    /// Whether the document is full.
    pub fn at_capacity(&self) -> bool {
        self.data.len() >= MAX_SKINS
    }

    /// The record for the active skin, if one is set.
    pub fn active_record(&self) -> Option<&SkinRecord> {
        self.active.as_deref().and_then(|key| self.data.get(key))
    }

    /// Parse a document from its serialized JSON form.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize the document to its persisted JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
