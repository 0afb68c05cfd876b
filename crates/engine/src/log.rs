//! The event log itself

use std::collections::VecDeque;

use aoilog_core::{EventDraft, LogCategory, LogEntry, LogLevel};
use aoilog_store::{probe, SnapshotStore};
use chrono::{Duration, Utc};

use crate::config::EventLogConfig;
use crate::filter::EntryFilter;
use crate::stats::LogStatistics;

/// One-shot user-facing notice that persistence is unavailable
///
/// Queued when the availability probe fails at load time; the presentation
/// layer shows it once as a dismissible banner. Later persist failures stay
/// silent apart from tracing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageNotice {
    pub message: String,
}

/// Outcome of a retention cleanup pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed_count: usize,
    pub remaining_count: usize,
}

type StatsObserver = Box<dyn FnMut(&LogStatistics)>;

/// Bounded, ordered log of application events
///
/// Entries are kept newest-first in memory for the whole session; only the
/// newest `persist_cap` entries are written through to the snapshot store.
/// One instance is constructed per application session and injected into
/// every module that records or reads events; there is a single logical
/// writer and no interior locking.
///
/// Storage failures never propagate to callers. A failed availability probe
/// or a failed write flips the log into memory-only operation for the rest
/// of the session, with no retry.
pub struct EventLog<S: SnapshotStore> {
    entries: VecDeque<LogEntry>,
    next_id: u64,
    store: S,
    config: EventLogConfig,
    persistence_enabled: bool,
    notice: Option<StorageNotice>,
    observer: Option<StatsObserver>,
}

impl<S: SnapshotStore> EventLog<S> {
    /// Create an empty log over `store`; call [`load`](Self::load) next
    pub fn new(store: S, config: EventLogConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            store,
            config,
            persistence_enabled: true,
            notice: None,
            observer: None,
        }
    }

    /// Probe the store and hydrate entries from the persisted snapshot
    ///
    /// A failed probe disables persistence for the session and queues the
    /// one-shot [`StorageNotice`]. A missing snapshot key starts empty; a
    /// corrupt snapshot also starts empty but leaves persistence enabled,
    /// so the next persist simply overwrites the bad data.
    pub fn load(&mut self) {
        self.persistence_enabled = probe(&mut self.store);
        if !self.persistence_enabled {
            tracing::warn!("snapshot store unavailable, keeping logs in memory only");
            self.notice = Some(StorageNotice {
                message: "Log storage is unavailable; entries will be kept in memory for this \
                          session only."
                    .to_string(),
            });
            return;
        }

        let raw = match self.store.get(&self.config.snapshot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read log snapshot, starting empty");
                return;
            }
        };

        match serde_json::from_str::<Vec<LogEntry>>(&raw) {
            Ok(loaded) => {
                self.next_id = loaded.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
                self.entries = loaded.into();
                tracing::debug!(count = self.entries.len(), "loaded log snapshot");
            }
            Err(err) => {
                tracing::warn!(error = %err, "log snapshot is corrupt, starting empty");
                self.entries.clear();
            }
        }
    }

    /// Record an event with default actor, origin, and no details
    pub fn record(
        &mut self,
        level: LogLevel,
        category: LogCategory,
        description: impl Into<String>,
    ) -> u64 {
        self.record_event(EventDraft::new(level, category, description))
    }

    /// Record a fully specified event
    ///
    /// Allocates the next id, stamps the current time, prepends the entry,
    /// then synchronously persists and notifies the statistics observer.
    /// Runs unconditionally on every call; persistence failures degrade
    /// silently instead of surfacing here.
    pub fn record_event(&mut self, draft: EventDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(draft.into_entry(id, Utc::now()));
        self.persist();
        self.notify_observer();
        id
    }

    fn persist(&mut self) {
        if !self.persistence_enabled {
            return;
        }

        let snapshot: Vec<&LogEntry> = self.entries.iter().take(self.config.persist_cap).collect();
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize log snapshot");
                return;
            }
        };

        if let Err(err) = self.store.set(&self.config.snapshot_key, &raw) {
            tracing::warn!(
                error = %err,
                "persisting log snapshot failed, disabling persistence for this session"
            );
            self.persistence_enabled = false;
        }
    }

    /// Entries matching `filter`, newest-first, as owned clones
    #[must_use]
    pub fn query(&self, filter: &EntryFilter) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect()
    }

    /// Look up one entry by id
    #[must_use]
    pub fn entry(&self, id: u64) -> Option<&LogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All entries, newest-first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current counts, recomputed on demand
    #[must_use]
    pub fn statistics(&self) -> LogStatistics {
        LogStatistics::compute(self.entries.iter(), Utc::now())
    }

    /// Drop entries older than `retention_days` and audit the removal
    ///
    /// When anything was removed, the shrunken log is persisted and a single
    /// Info/SystemConfig audit entry is appended whose details carry the
    /// counts as JSON. When nothing qualified, neither happens, so periodic
    /// invocations do not spam the log.
    pub fn cleanup_old(&mut self, retention_days: u32) -> CleanupReport {
        let cutoff = Utc::now() - Duration::days(i64::from(retention_days));
        let before = self.entries.len();
        self.entries.retain(|entry| entry.timestamp >= cutoff);
        let remaining = self.entries.len();
        let removed = before - remaining;

        if removed > 0 {
            self.persist();
            let details = serde_json::json!({
                "removed_count": removed,
                "remaining_count": remaining,
                "retention_days": retention_days,
            });
            self.record_event(
                EventDraft::new(
                    LogLevel::Info,
                    LogCategory::SystemConfig,
                    format!("Removed {removed} log entries older than {retention_days} days"),
                )
                .with_details(details.to_string()),
            );
        }

        CleanupReport {
            removed_count: removed,
            remaining_count: remaining,
        }
    }

    /// Empty the log and restart id allocation at 1
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 1;
        self.persist();
        self.notify_observer();
    }

    /// Whether writes still go through to the snapshot store
    #[must_use]
    pub fn persistence_enabled(&self) -> bool {
        self.persistence_enabled
    }

    /// Take the degraded-mode notice, if one is pending
    ///
    /// Returns `Some` at most once per session.
    pub fn take_storage_notice(&mut self) -> Option<StorageNotice> {
        self.notice.take()
    }

    /// Register the presentation layer's statistics callback
    ///
    /// Invoked synchronously with fresh counts after every record and clear.
    pub fn set_observer(&mut self, observer: impl FnMut(&LogStatistics) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn notify_observer(&mut self) {
        let stats = LogStatistics::compute(self.entries.iter(), Utc::now());
        if let Some(observer) = self.observer.as_mut() {
            observer(&stats);
        }
    }

    /// Borrow the underlying store
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &EventLogConfig {
        &self.config
    }
}
