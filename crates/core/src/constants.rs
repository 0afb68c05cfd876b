/// Constants shared across the aoilog crates
// Snapshot wire format
pub const SNAPSHOT_KEY: &str = "system_logs";
pub const PERSIST_CAP: usize = 1000;

// Storage availability probe
pub const PROBE_KEY: &str = "__storage_test__";
pub const PROBE_VALUE: &str = "test";

// Entry defaults
pub const DEFAULT_ACTOR: &str = "System";
pub const DEFAULT_ORIGIN: &str = "127.0.0.1";

// Read-side defaults
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

// CSV export
pub const EXPORT_FILE_PREFIX: &str = "system_logs";
