//! In-memory snapshot store

use std::collections::HashMap;

use crate::SnapshotStore;

/// HashMap-backed store, infallible by construction
///
/// The default backend for tests and for embedders that bring no storage of
/// their own; contents live exactly as long as the store value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> aoilog_core::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> aoilog_core::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> aoilog_core::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
