//! Remote synchronization for the Fable skin manager.
//!
//! Two user-triggered, idempotent operations: push the whole skin
//! document to the remote store, or fetch the remote copy. There is no
//! background sync; the remote copy only moves when the user asks.

mod client;
mod remote;
mod wire;

pub use client::{DEFAULT_TIMEOUT, SyncClient};
pub use remote::{HttpRemote, MemoryRemote, RemoteStore};
pub use wire::{LoadResponse, SaveRequest, SaveResponse};
