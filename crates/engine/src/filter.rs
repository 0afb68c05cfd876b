//! Entry filtering

use aoilog_core::{LogCategory, LogEntry, LogLevel};
use chrono::{DateTime, Utc};

/// Selects a subset of entries by time range, level, and/or category
///
/// All present predicates are ANDed; an unset field means no constraint on
/// that dimension, so the default filter matches everything. Time bounds are
/// inclusive on both ends. Malformed ranges (start after end) are not an
/// error; they simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub level: Option<LogLevel>,
    pub category: Option<LogCategory>,
}

impl EntryFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self
    }

    #[must_use]
    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end_time = Some(end);
        self
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn category(mut self, category: LogCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether `entry` satisfies every present predicate
    #[must_use]
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(start) = self.start_time {
            if entry.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end_time {
            if entry.timestamp > end {
                return false;
            }
        }
        if let Some(level) = self.level {
            if entry.level != level {
                return false;
            }
        }
        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoilog_core::EventDraft;
    use chrono::TimeZone;

    fn entry_at(id: u64, level: LogLevel, category: LogCategory, hour: u32) -> LogEntry {
        EventDraft::new(level, category, format!("event {id}")).into_entry(
            id,
            Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let entry = entry_at(1, LogLevel::Error, LogCategory::UserAction, 12);
        assert!(EntryFilter::new().matches(&entry));
    }

    #[test]
    fn level_and_category_must_match_exactly() {
        let entry = entry_at(1, LogLevel::Warning, LogCategory::DataChange, 12);

        assert!(EntryFilter::new().level(LogLevel::Warning).matches(&entry));
        assert!(!EntryFilter::new().level(LogLevel::Error).matches(&entry));
        assert!(EntryFilter::new()
            .category(LogCategory::DataChange)
            .matches(&entry));
        assert!(!EntryFilter::new()
            .category(LogCategory::PageAccess)
            .matches(&entry));
    }

    #[test]
    fn time_bounds_are_inclusive() {
        let entry = entry_at(1, LogLevel::Info, LogCategory::PageAccess, 12);
        let at = entry.timestamp;

        assert!(EntryFilter::new().since(at).matches(&entry));
        assert!(EntryFilter::new().until(at).matches(&entry));
        assert!(EntryFilter::new().since(at).until(at).matches(&entry));

        let later = Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap();
        assert!(!EntryFilter::new().since(later).matches(&entry));
        let earlier = Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap();
        assert!(!EntryFilter::new().until(earlier).matches(&entry));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let entry = entry_at(1, LogLevel::Info, LogCategory::PageAccess, 12);
        let filter = EntryFilter::new()
            .since(Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap())
            .until(Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap());
        assert!(!filter.matches(&entry));
    }

    #[test]
    fn predicates_are_anded() {
        let entry = entry_at(1, LogLevel::Error, LogCategory::SystemConfig, 12);
        let matching = EntryFilter::new()
            .level(LogLevel::Error)
            .category(LogCategory::SystemConfig);
        assert!(matching.matches(&entry));

        let half_matching = EntryFilter::new()
            .level(LogLevel::Error)
            .category(LogCategory::PageAccess);
        assert!(!half_matching.matches(&entry));
    }
}
