//! Sync client.
//!
//! Wraps a [`RemoteStore`] with the document-level contract: serialize
//! whole documents out, validate whole documents in (same checks as the
//! local store -- shape via parsing, then fingerprint), and convert
//! timeouts into plain network failures.

use std::time::Duration;

use fable_types::{Result, SkinDocument, SkinError};

use crate::remote::RemoteStore;

/// Default network deadline for a push or fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the two remote store operations.
#[derive(Debug)]
pub struct SyncClient<R> {
    remote: R,
    timeout: Duration,
}

impl<R: RemoteStore> SyncClient<R> {
    pub fn new(remote: R) -> Self {
        Self::with_timeout(remote, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(remote: R, timeout: Duration) -> Self {
        Self { remote, timeout }
    }

    /// Push the full document to the remote store.
    ///
    /// Returns the server's confirmation message. Server-side rejections
    /// surface as [`SkinError::RemoteError`]; unreachable or expired
    /// requests as [`SkinError::NetworkFailure`].
    pub async fn push(&self, doc: &SkinDocument) -> Result<String> {
        let payload = doc.to_json()?;
        let response = self.bounded(self.remote.save_document(&payload)).await?;
        if response.success {
            let message = response
                .message
                .unwrap_or_else(|| "skins saved".to_string());
            log::debug!("skin push accepted: {message}");
            Ok(message)
        } else {
            let reason = response.failure_reason();
            log::warn!("remote rejected skin push: {reason}");
            Err(SkinError::RemoteError(reason))
        }
    }

    /// Fetch the remote document and validate it for `fingerprint`.
    ///
    /// The payload goes through the same acceptance checks as the local
    /// store: it must parse as a document, and its fingerprint must
    /// match the caller's session. Nothing is persisted here; the
    /// caller decides what to do with the validated document.
    pub async fn fetch(&self, fingerprint: &str) -> Result<SkinDocument> {
        let response = self.bounded(self.remote.load_document()).await?;
        if !response.success {
            let reason = response.failure_reason();
            log::warn!("remote rejected skin fetch: {reason}");
            return Err(SkinError::RemoteError(reason));
        }
        let raw = response
            .skins
            .ok_or_else(|| SkinError::RemoteError("response carries no skins payload".to_string()))?;
        let doc = SkinDocument::from_json(&raw).inspect_err(|e| {
            log::warn!("remote skin document is malformed: {e}");
        })?;
        if !doc.belongs_to(fingerprint) {
            log::warn!("remote skin document belongs to another session");
            return Err(SkinError::WrongFingerprint);
        }
        Ok(doc)
    }

    /// Run `fut` under the configured network deadline.
    async fn bounded<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("remote operation timed out after {:?}", self.timeout);
                Err(SkinError::NetworkFailure(format!(
                    "timed out after {:?}",
                    self.timeout
                )))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MemoryRemote;
    use crate::wire::{LoadResponse, SaveResponse};
    use fable_types::SkinRecord;

    fn sample_doc(fp: &str) -> SkinDocument {
        let mut doc = SkinDocument::empty(fp);
        doc.data.insert(
            "RGFyaw".to_string(),
            SkinRecord {
                name: "Dark".to_string(),
                author: None,
                version: Some("1.0".to_string()),
                css: "body { background: #000; }".to_string(),
            },
        );
        doc.active = Some("RGFyaw".to_string());
        doc
    }

    #[tokio::test]
    async fn push_stores_serialized_document() {
        let client = SyncClient::new(MemoryRemote::new());
        let doc = sample_doc("fp");
        let message = client.push(&doc).await.unwrap();
        assert_eq!(message, "Skins saved.");

        let stored = client.remote.stored().unwrap();
        assert_eq!(SkinDocument::from_json(&stored).unwrap(), doc);
    }

    #[tokio::test]
    async fn push_surfaces_server_rejection() {
        let client = SyncClient::new(MemoryRemote::rejecting("quota exceeded"));
        let err = client.push(&sample_doc("fp")).await.unwrap_err();
        assert!(matches!(err, SkinError::RemoteError(ref m) if m == "quota exceeded"));
    }

    #[tokio::test]
    async fn push_surfaces_network_failure() {
        let client = SyncClient::new(MemoryRemote::offline());
        assert!(matches!(
            client.push(&sample_doc("fp")).await,
            Err(SkinError::NetworkFailure(_))
        ));
    }

    #[tokio::test]
    async fn fetch_round_trips() {
        let doc = sample_doc("fp");
        let remote = MemoryRemote::with_stored(doc.to_json().unwrap());
        let client = SyncClient::new(remote);
        assert_eq!(client.fetch("fp").await.unwrap(), doc);
    }

    #[tokio::test]
    async fn fetch_rejects_wrong_fingerprint() {
        // Remote copy belongs to another session.
        let doc = sample_doc("abc");
        let remote = MemoryRemote::with_stored(doc.to_json().unwrap());
        let client = SyncClient::new(remote);
        assert!(matches!(
            client.fetch("xyz").await,
            Err(SkinError::WrongFingerprint)
        ));
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_payload() {
        let remote = MemoryRemote::with_stored("{truncated");
        let client = SyncClient::new(remote);
        assert!(matches!(
            client.fetch("fp").await,
            Err(SkinError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn fetch_surfaces_empty_remote() {
        let client = SyncClient::new(MemoryRemote::new());
        assert!(matches!(
            client.fetch("fp").await,
            Err(SkinError::RemoteError(_))
        ));
    }

    /// A remote that never responds.
    struct HangingRemote;

    impl crate::remote::RemoteStore for HangingRemote {
        async fn save_document(&self, _payload: &str) -> Result<SaveResponse> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(SaveResponse::default())
        }

        async fn load_document(&self) -> Result<LoadResponse> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(LoadResponse::default())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn expired_deadline_is_a_network_failure() {
        let client = SyncClient::with_timeout(HangingRemote, Duration::from_millis(100));
        let err = client.push(&sample_doc("fp")).await.unwrap_err();
        assert!(matches!(err, SkinError::NetworkFailure(ref m) if m.contains("timed out")));

        let err = client.fetch("fp").await.unwrap_err();
        assert!(matches!(err, SkinError::NetworkFailure(_)));
    }
}
