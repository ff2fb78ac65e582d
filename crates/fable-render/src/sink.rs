//! Style injection seam.

use std::collections::BTreeMap;

/// Receives injected style payloads, keyed by element id.
///
/// A host UI implements this against its real document head. The
/// renderer only ever uses one id, and always removes before
/// re-injecting, so implementations need no duplicate handling.
pub trait StyleSink {
    /// Insert (or replace) the payload stored under `id`.
    fn inject(&mut self, id: &str, css: &str);

    /// Remove the payload stored under `id`, if present.
    fn remove(&mut self, id: &str);
}

/// In-memory sink for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemorySink {
    payloads: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload currently stored under `id`.
    pub fn payload(&self, id: &str) -> Option<&str> {
        self.payloads.get(id).map(String::as_str)
    }

    /// Number of stored payloads.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Whether nothing is injected.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl StyleSink for MemorySink {
    fn inject(&mut self, id: &str, css: &str) {
        self.payloads.insert(id.to_string(), css.to_string());
    }

    fn remove(&mut self, id: &str) {
        self.payloads.remove(id);
    }
}
