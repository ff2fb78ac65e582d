//! Renderer for the Fable skin manager.
//!
//! Projects the skin document into two things: a list view-model for
//! display, and a single injected style payload carrying the active
//! skin's CSS. The injection target is behind the [`StyleSink`] trait so
//! hosts plug in their own document head; [`MemorySink`] serves tests
//! and headless use.

mod sink;
mod view;

pub use sink::{MemorySink, StyleSink};
pub use view::{SkinListEntry, SkinListView};

use fable_types::SkinDocument;

/// Fixed id of the singleton style element carrying the active skin.
pub const STYLE_ELEMENT_ID: &str = "fable-active-skin";

/// Execution context the renderer runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Administrative/editing contexts never get user CSS injected.
    pub admin: bool,
}

/// Projects skin documents into the list view and the style sink.
#[derive(Debug, Default)]
pub struct Renderer {
    context: RenderContext,
}

impl Renderer {
    pub fn new(context: RenderContext) -> Self {
        Self { context }
    }

    /// Build the list view for a document.
    ///
    /// Entries come out in document order (key-sorted, deterministic
    /// across reloads). The upload affordance is hidden at capacity and
    /// whenever the document does not belong to the current session.
    pub fn render_list(&self, doc: &SkinDocument, fingerprint: Option<&str>) -> SkinListView {
        let owned = fingerprint.is_some_and(|fp| doc.belongs_to(fp));
        let entries = doc
            .data
            .iter()
            .map(|(key, rec)| SkinListEntry {
                key: key.clone(),
                name: rec.name.clone(),
                author: rec.author.clone(),
                version: rec.version.clone(),
                active: doc.active.as_deref() == Some(key.as_str()),
            })
            .collect();
        SkinListView {
            entries,
            upload_enabled: owned && !doc.at_capacity(),
        }
    }

    /// Apply the document's active skin to `sink`.
    ///
    /// Always removes the previously injected payload first, so the
    /// element stays a singleton. Injection is skipped (leaving nothing
    /// applied) in admin context, when the document does not belong to
    /// the session, or when the active record is missing or empty.
    pub fn apply_active_skin(
        &self,
        doc: &SkinDocument,
        fingerprint: Option<&str>,
        sink: &mut dyn StyleSink,
    ) {
        sink.remove(STYLE_ELEMENT_ID);
        if self.context.admin {
            log::debug!("admin context, skipping skin injection");
            return;
        }
        if !fingerprint.is_some_and(|fp| doc.belongs_to(fp)) {
            return;
        }
        match doc.active_record() {
            Some(rec) if !rec.css.is_empty() => {
                sink.inject(STYLE_ELEMENT_ID, &rec.css);
            },
            _ => {},
        }
    }
}
