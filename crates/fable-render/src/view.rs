//! List view-model.

/// One row in the rendered skin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinListEntry {
    /// Registry key (encoded name).
    pub key: String,
    pub name: String,
    pub author: Option<String>,
    pub version: Option<String>,
    /// Whether this entry is the applied skin.
    pub active: bool,
}

/// The rendered skin list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinListView {
    /// Entries in document order.
    pub entries: Vec<SkinListEntry>,
    /// Whether the upload control is shown.
    pub upload_enabled: bool,
}

impl SkinListView {
    /// The active entry, if any.
    pub fn active_entry(&self) -> Option<&SkinListEntry> {
        self.entries.iter().find(|e| e.active)
    }
}
