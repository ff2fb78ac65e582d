//! Skin manager orchestration.
//!
//! [`SkinManager`] is the one object a host constructs per session: it
//! owns the registry, the renderer, and the sync client, and funnels
//! every user action through them. [`ManagerConfig`] carries the knobs
//! a deployment tunes.

mod config;
mod manager;

pub use config::ManagerConfig;
pub use manager::{PendingUpload, SkinManager};
