//! Skin validation and registry.
//!
//! A skin is a user-supplied CSS stylesheet with a comment header naming
//! it. This crate owns the content rules (well-formedness, metadata),
//! the reversible name-to-key encoding, and the [`SkinRegistry`] that
//! mutates the persisted document while holding its invariants: at most
//! [`fable_types::MAX_SKINS`] records, and at most one active skin.

mod key;
mod registry;
mod template;
pub mod validator;

pub use key::{decode_key, encode_key};
pub use registry::SkinRegistry;
pub use template::template;
pub use validator::{SkinMetadata, extract_metadata, is_well_formed_css};
