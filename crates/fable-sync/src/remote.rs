//! Remote store transports.
//!
//! [`RemoteStore`] is the seam between the sync client and whatever
//! actually holds the server-side copy. [`HttpRemote`] talks to the
//! site's endpoints with the session cookie attached; [`MemoryRemote`]
//! is the test double.

use std::sync::Mutex;

use fable_types::{Result, SkinError, session::SESSION_COOKIE};

use crate::wire::{LoadResponse, SaveRequest, SaveResponse};

/// Server-side persistence for a user's skin document.
pub trait RemoteStore {
    /// Upsert the serialized document under the caller's session
    /// identity.
    fn save_document(&self, payload: &str) -> impl Future<Output = Result<SaveResponse>>;

    /// Fetch the serialized document stored for the caller's session
    /// identity.
    fn load_document(&self) -> impl Future<Output = Result<LoadResponse>>;
}

/// HTTP transport for the remote store.
///
/// Authenticates by replaying the login cookie; the server resolves the
/// session identity from it.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
    cookie: String,
}

impl HttpRemote {
    /// Build a transport against `base_url` for the given session
    /// fingerprint.
    pub fn new(base_url: impl Into<String>, fingerprint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            cookie: format!("{SESSION_COOKIE}={fingerprint}"),
        }
    }

    fn endpoint(&self, op: &str) -> String {
        format!("{}/skins/{op}", self.base_url.trim_end_matches('/'))
    }
}

impl RemoteStore for HttpRemote {
    async fn save_document(&self, payload: &str) -> Result<SaveResponse> {
        let request = SaveRequest {
            skins: payload.to_string(),
        };
        let response = self
            .client
            .post(self.endpoint("save"))
            .header(reqwest::header::COOKIE, &self.cookie)
            .json(&request)
            .send()
            .await
            .map_err(|e| SkinError::NetworkFailure(e.to_string()))?;
        response
            .json::<SaveResponse>()
            .await
            .map_err(|e| SkinError::NetworkFailure(format!("malformed save response: {e}")))
    }

    async fn load_document(&self) -> Result<LoadResponse> {
        let response = self
            .client
            .get(self.endpoint("load"))
            .header(reqwest::header::COOKIE, &self.cookie)
            .send()
            .await
            .map_err(|e| SkinError::NetworkFailure(e.to_string()))?;
        response
            .json::<LoadResponse>()
            .await
            .map_err(|e| SkinError::NetworkFailure(format!("malformed load response: {e}")))
    }
}

/// In-memory remote store for tests and offline use.
///
/// Configurable to report a server-side rejection (`reject_with`) or to
/// behave as unreachable (`unreachable`).
#[derive(Debug, Default)]
pub struct MemoryRemote {
    stored: Mutex<Option<String>>,
    reject_with: Option<String>,
    unreachable: bool,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// A remote seeded with an already-stored payload.
    pub fn with_stored(payload: impl Into<String>) -> Self {
        Self {
            stored: Mutex::new(Some(payload.into())),
            ..Self::default()
        }
    }

    /// A remote that rejects every operation with a server error.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// A remote that cannot be reached at all.
    pub fn offline() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// The payload the remote currently holds.
    pub fn stored(&self) -> Option<String> {
        self.stored.lock().expect("remote store poisoned").clone()
    }
}

impl RemoteStore for MemoryRemote {
    async fn save_document(&self, payload: &str) -> Result<SaveResponse> {
        if self.unreachable {
            return Err(SkinError::NetworkFailure("connection refused".to_string()));
        }
        if let Some(reason) = &self.reject_with {
            return Ok(SaveResponse {
                success: false,
                error: Some(reason.clone()),
                ..SaveResponse::default()
            });
        }
        *self.stored.lock().expect("remote store poisoned") = Some(payload.to_string());
        Ok(SaveResponse {
            success: true,
            message: Some("Skins saved.".to_string()),
            ..SaveResponse::default()
        })
    }

    async fn load_document(&self) -> Result<LoadResponse> {
        if self.unreachable {
            return Err(SkinError::NetworkFailure("connection refused".to_string()));
        }
        if let Some(reason) = &self.reject_with {
            return Ok(LoadResponse {
                success: false,
                error: Some(reason.clone()),
                ..LoadResponse::default()
            });
        }
        match self.stored() {
            Some(payload) => Ok(LoadResponse {
                success: true,
                skins: Some(payload),
                message: Some("Skins loaded.".to_string()),
                ..LoadResponse::default()
            }),
            None => Ok(LoadResponse {
                success: false,
                error: Some("no skins stored".to_string()),
                ..LoadResponse::default()
            }),
        }
    }
}
