//! Snapshot storage backends for the aoilog event log
//!
//! The engine talks to persistence through the [`SnapshotStore`] trait: a
//! plain string key-value surface with get/set/remove, mirroring the
//! browser-style store the original dashboard wrote its snapshot to. Two
//! backends are provided: an infallible in-memory map and a file-per-key
//! store with atomic writes.

pub mod file;
pub mod memory;

use aoilog_core::constants::{PROBE_KEY, PROBE_VALUE};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key-value storage for the persisted log snapshot
///
/// Implementations may fail on any call; the engine treats every failure as
/// a signal to degrade to memory-only operation, so backends should return
/// errors rather than panic.
pub trait SnapshotStore {
    /// Read the value stored under `key`, `None` when the key is absent
    fn get(&self, key: &str) -> aoilog_core::Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> aoilog_core::Result<()>;

    /// Delete `key`; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> aoilog_core::Result<()>;
}

/// One-time availability probe: write and delete a throwaway key
///
/// Run once per session before the first load. A `false` result means the
/// store cannot be written at all and the caller should not try again.
pub fn probe<S: SnapshotStore>(store: &mut S) -> bool {
    if let Err(err) = store.set(PROBE_KEY, PROBE_VALUE) {
        tracing::warn!(error = %err, "snapshot store failed availability probe");
        return false;
    }
    if let Err(err) = store.remove(PROBE_KEY) {
        tracing::warn!(error = %err, "snapshot store failed probe cleanup");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_passes_on_memory_store() {
        let mut store = MemoryStore::new();
        assert!(probe(&mut store));
        // The throwaway key must not linger.
        assert_eq!(store.get(PROBE_KEY).unwrap(), None);
    }
}
