//! Error types for the Fable skin manager.

use std::io;

use crate::document::{MAX_CSS_BYTES, MAX_SKINS};

/// Errors produced by the skin manager.
///
/// Everything here is recoverable: a failed operation leaves the skin
/// document either unchanged or reset to the empty default, and the
/// caller reports the error and carries on.
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    #[error("wrong file type: {0}")]
    WrongFileType(String),

    #[error("invalid CSS: unbalanced braces or forbidden characters")]
    InvalidCss,

    #[error("missing metadata: skin has no Name field")]
    MissingMetadata,

    #[error("too many skins: limit is {MAX_SKINS}")]
    TooManySkins,

    #[error("session fingerprint mismatch")]
    WrongFingerprint,

    #[error("file too large: {0} bytes (limit {MAX_CSS_BYTES})")]
    FileTooLarge(usize),

    #[error("sync already in flight")]
    SyncBusy,

    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("remote error: {0}")]
    RemoteError(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkinError>;
