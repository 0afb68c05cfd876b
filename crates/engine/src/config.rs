//! Engine configuration

use aoilog_core::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_RETENTION_DAYS, PERSIST_CAP, SNAPSHOT_KEY,
};

/// Configuration for one event-log session
///
/// Immutable after construction; the defaults reproduce the dashboard's
/// original behavior and are what embedders should normally use.
#[derive(Debug, Clone)]
pub struct EventLogConfig {
    /// Store key the snapshot is written under
    pub snapshot_key: String,
    /// Maximum number of entries written to the persisted snapshot
    pub persist_cap: usize,
    /// Default page size for read-side views
    pub page_size: usize,
    /// Default retention window for `cleanup_old`, in days
    pub retention_days: u32,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            snapshot_key: SNAPSHOT_KEY.to_string(),
            persist_cap: PERSIST_CAP,
            page_size: DEFAULT_PAGE_SIZE,
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_snapshot_contract() {
        let config = EventLogConfig::default();
        assert_eq!(config.snapshot_key, "system_logs");
        assert_eq!(config.persist_cap, 1000);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.retention_days, 30);
    }
}
