//! Shared types for the Fable skin manager.
//!
//! Leaf crate with no internal dependencies: the error taxonomy, the
//! persisted skin document model, and session fingerprint parsing.

pub mod document;
pub mod error;
pub mod session;

pub use document::{MAX_CSS_BYTES, MAX_SKINS, SkinDocument, SkinRecord};
pub use error::{Result, SkinError};
pub use session::{SESSION_COOKIE, fingerprint_from_cookie_header, session_fingerprint};
