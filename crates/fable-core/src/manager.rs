//! The skin manager.
//!
//! One `SkinManager` is constructed per session and owns everything the
//! skin feature needs: the registry over the local store, the renderer,
//! and the sync client. User actions arrive as method calls; each one
//! runs to completion against the whole document before the next.

use fable_render::{Renderer, SkinListView, StyleSink};
use fable_skin::SkinRegistry;
use fable_store::KvStore;
use fable_sync::{RemoteStore, SyncClient};
use fable_types::{Result, SkinDocument, SkinError};

/// A file the user has selected for upload but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub content: String,
}

/// Orchestrates the skin feature for one session.
#[derive(Debug)]
pub struct SkinManager<S, R> {
    registry: SkinRegistry<S>,
    renderer: Renderer,
    sync: SyncClient<R>,
    sync_in_flight: bool,
    pending_upload: Option<PendingUpload>,
}

impl<S: KvStore, R: RemoteStore> SkinManager<S, R> {
    pub fn new(registry: SkinRegistry<S>, renderer: Renderer, sync: SyncClient<R>) -> Self {
        Self {
            registry,
            renderer,
            sync,
            sync_in_flight: false,
            pending_upload: None,
        }
    }

    /// Current session fingerprint, if logged in.
    pub fn fingerprint(&self) -> Option<&str> {
        self.registry.local().fingerprint()
    }

    /// Current skin document.
    pub fn document(&self) -> SkinDocument {
        self.registry.document()
    }

    /// Build the list view for display.
    pub fn view(&self) -> SkinListView {
        let doc = self.registry.document();
        self.renderer.render_list(&doc, self.fingerprint())
    }

    /// Apply (or clear) the active skin on `sink`.
    pub fn apply(&self, sink: &mut dyn StyleSink) {
        let doc = self.registry.document();
        self.renderer.apply_active_skin(&doc, self.fingerprint(), sink);
    }

    /// Stage a selected file for upload.
    ///
    /// The media-type gate lives here, at the import boundary: only
    /// `.css` files get past it, before any content validation runs.
    pub fn stage_upload(&mut self, file_name: &str, content: String) -> Result<()> {
        if !file_name.to_ascii_lowercase().ends_with(".css") {
            return Err(SkinError::WrongFileType(file_name.to_string()));
        }
        self.pending_upload = Some(PendingUpload {
            file_name: file_name.to_string(),
            content,
        });
        Ok(())
    }

    /// The staged file, if any.
    pub fn pending_upload(&self) -> Option<&PendingUpload> {
        self.pending_upload.as_ref()
    }

    /// Validate and store the staged file as a skin. Clears the staged
    /// selection whether or not the upload is accepted.
    pub fn commit_upload(&mut self) -> Result<String> {
        let pending = self
            .pending_upload
            .take()
            .ok_or_else(|| SkinError::Store("no file staged for upload".to_string()))?;
        self.registry.add_skin(&pending.content)
    }

    /// Stage and commit in one step.
    pub fn upload(&mut self, file_name: &str, content: String) -> Result<String> {
        self.stage_upload(file_name, content)?;
        self.commit_upload()
    }

    /// Toggle the active skin.
    pub fn toggle(&mut self, key: &str) -> Result<()> {
        self.registry.toggle_active(key)
    }

    /// Delete a skin.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        self.registry.delete_skin(key)
    }

    /// Whether a push or pull is currently in flight.
    pub fn sync_in_flight(&self) -> bool {
        self.sync_in_flight
    }

    /// Push the local document to the remote store.
    ///
    /// Returns the server's confirmation message. Any staged upload is
    /// cleared on completion regardless of outcome, mirroring the file
    /// input reset in the UI.
    pub async fn push_remote(&mut self) -> Result<String> {
        if self.sync_in_flight {
            return Err(SkinError::SyncBusy);
        }
        if self.fingerprint().is_none() {
            return Err(SkinError::WrongFingerprint);
        }
        self.sync_in_flight = true;
        let doc = self.registry.document();
        let result = self.sync.push(&doc).await;
        self.sync_in_flight = false;
        self.pending_upload = None;
        result
    }

    /// Pull the remote document, accept it locally, and re-apply.
    ///
    /// On success the validated remote copy replaces the local one, the
    /// list view is rebuilt, and the active skin is re-applied to
    /// `sink`. On any failure local state is left untouched. The staged
    /// upload is cleared either way.
    pub async fn pull_remote(&mut self, sink: &mut dyn StyleSink) -> Result<SkinListView> {
        if self.sync_in_flight {
            return Err(SkinError::SyncBusy);
        }
        let Some(fingerprint) = self.fingerprint().map(str::to_string) else {
            return Err(SkinError::WrongFingerprint);
        };
        self.sync_in_flight = true;
        let fetched = self.sync.fetch(&fingerprint).await;
        self.sync_in_flight = false;
        self.pending_upload = None;

        let doc = fetched?;
        self.registry.local_mut().save(&doc)?;
        let view = self.renderer.render_list(&doc, Some(&fingerprint));
        self.renderer
            .apply_active_skin(&doc, Some(&fingerprint), sink);
        log::info!("accepted remote skin document ({} skins)", doc.data.len());
        Ok(view)
    }

    #[cfg(test)]
    fn force_in_flight(&mut self) {
        self.sync_in_flight = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fable_render::{MemorySink, RenderContext, STYLE_ELEMENT_ID};
    use fable_store::{LocalStore, MemoryStore};
    use fable_sync::MemoryRemote;

    fn manager_with(remote: MemoryRemote) -> SkinManager<MemoryStore, MemoryRemote> {
        let local = LocalStore::new(MemoryStore::new(), Some("fp".to_string()));
        SkinManager::new(
            SkinRegistry::new(local),
            Renderer::new(RenderContext::default()),
            SyncClient::new(remote),
        )
    }

    fn manager() -> SkinManager<MemoryStore, MemoryRemote> {
        manager_with(MemoryRemote::new())
    }

    fn css(name: &str) -> String {
        format!("/*\nName: {name}\n*/\nbody {{ color: red; }}\n")
    }

    #[test]
    fn upload_and_view() {
        let mut mgr = manager();
        let key = mgr.upload("dark.css", css("Dark")).unwrap();
        let view = mgr.view();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].key, key);
        assert!(view.upload_enabled);
        assert!(mgr.pending_upload().is_none());
    }

    #[test]
    fn non_css_file_rejected_before_validation() {
        let mut mgr = manager();
        // Content is a perfectly valid skin; the extension alone rejects it.
        let err = mgr.upload("skin.txt", css("Dark")).unwrap_err();
        assert!(matches!(err, SkinError::WrongFileType(_)));
        assert!(mgr.document().data.is_empty());
    }

    #[test]
    fn commit_without_stage_is_an_error() {
        let mut mgr = manager();
        assert!(mgr.commit_upload().is_err());
    }

    #[test]
    fn toggle_then_apply_injects() {
        let mut mgr = manager();
        let key = mgr.upload("dark.css", css("Dark")).unwrap();
        mgr.toggle(&key).unwrap();

        let mut sink = MemorySink::new();
        mgr.apply(&mut sink);
        assert!(sink.payload(STYLE_ELEMENT_ID).is_some());

        mgr.toggle(&key).unwrap();
        mgr.apply(&mut sink);
        assert!(sink.payload(STYLE_ELEMENT_ID).is_none());
    }

    #[tokio::test]
    async fn push_sends_current_document() {
        let mut mgr = manager();
        mgr.upload("dark.css", css("Dark")).unwrap();
        let message = mgr.push_remote().await.unwrap();
        assert_eq!(message, "Skins saved.");
        assert!(!mgr.sync_in_flight());
    }

    #[tokio::test]
    async fn pull_replaces_local_and_reapplies() {
        // Seed a remote with a document where "Dark" is active.
        let mut source = manager();
        let key = source.upload("dark.css", css("Dark")).unwrap();
        source.toggle(&key).unwrap();
        let remote_doc = source.document();

        let remote = MemoryRemote::with_stored(remote_doc.to_json().unwrap());
        let mut mgr = manager_with(remote);
        assert!(mgr.document().data.is_empty());

        let mut sink = MemorySink::new();
        let view = mgr.pull_remote(&mut sink).await.unwrap();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(mgr.document(), remote_doc);
        assert!(sink.payload(STYLE_ELEMENT_ID).is_some());
    }

    #[tokio::test]
    async fn pull_with_wrong_fingerprint_leaves_local_untouched() {
        let stale = SkinDocument::empty("someone-else");
        let remote = MemoryRemote::with_stored(stale.to_json().unwrap());
        let mut mgr = manager_with(remote);
        mgr.upload("dark.css", css("Dark")).unwrap();
        let before = mgr.document();

        let mut sink = MemorySink::new();
        let err = mgr.pull_remote(&mut sink).await.unwrap_err();
        assert!(matches!(err, SkinError::WrongFingerprint));
        assert_eq!(mgr.document(), before);
    }

    #[tokio::test]
    async fn failed_push_still_clears_staged_upload() {
        let mut mgr = manager_with(MemoryRemote::offline());
        mgr.upload("dark.css", css("Dark")).unwrap();
        mgr.stage_upload("light.css", css("Light")).unwrap();
        assert!(mgr.pending_upload().is_some());

        assert!(mgr.push_remote().await.is_err());
        assert!(mgr.pending_upload().is_none());
        assert!(!mgr.sync_in_flight());
    }

    #[tokio::test]
    async fn concurrent_sync_is_refused() {
        let mut mgr = manager();
        mgr.force_in_flight();
        assert!(matches!(
            mgr.push_remote().await,
            Err(SkinError::SyncBusy)
        ));
        let mut sink = MemorySink::new();
        assert!(matches!(
            mgr.pull_remote(&mut sink).await,
            Err(SkinError::SyncBusy)
        ));
    }

    #[tokio::test]
    async fn logged_out_sync_is_refused() {
        let local = LocalStore::new(MemoryStore::new(), None);
        let mut mgr: SkinManager<MemoryStore, MemoryRemote> = SkinManager::new(
            SkinRegistry::new(local),
            Renderer::default(),
            SyncClient::new(MemoryRemote::new()),
        );
        assert!(matches!(
            mgr.push_remote().await,
            Err(SkinError::WrongFingerprint)
        ));
    }

    #[test]
    fn admin_context_never_injects() {
        let local = LocalStore::new(MemoryStore::new(), Some("fp".to_string()));
        let mut mgr: SkinManager<MemoryStore, MemoryRemote> = SkinManager::new(
            SkinRegistry::new(local),
            Renderer::new(RenderContext { admin: true }),
            SyncClient::new(MemoryRemote::new()),
        );
        let key = mgr.upload("dark.css", css("Dark")).unwrap();
        mgr.toggle(&key).unwrap();

        let mut sink = MemorySink::new();
        mgr.apply(&mut sink);
        assert!(sink.is_empty());
    }
}
