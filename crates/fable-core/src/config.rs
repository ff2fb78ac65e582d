//! Manager configuration.

use std::time::Duration;

use serde::Deserialize;

use fable_types::Result;

/// Deployment configuration for the skin manager.
#[derive(Debug, Clone, Deserialize)]
pub struct ManagerConfig {
    /// Storage key the skin document is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Name of the login cookie carrying the session fingerprint.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Base URL of the remote store, when sync is available.
    #[serde(default)]
    pub remote_url: Option<String>,
    /// Network deadline for push/pull, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Whether this is an administrative/editing context (user CSS is
    /// never injected there).
    #[serde(default)]
    pub admin_context: bool,
}

fn default_storage_key() -> String {
    fable_store::STORAGE_KEY.to_string()
}

fn default_cookie_name() -> String {
    fable_types::SESSION_COOKIE.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            cookie_name: default_cookie_name(),
            remote_url: None,
            timeout_secs: default_timeout_secs(),
            admin_context: false,
        }
    }
}

impl ManagerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Network deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
