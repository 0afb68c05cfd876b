//! Log statistics

use aoilog_core::{LogCategory, LogEntry, LogLevel};
use chrono::{DateTime, Utc};

/// Counts over the current in-memory entries
///
/// Recomputed on demand rather than cached; the in-memory log is bounded in
/// practice, so the O(n) sweep is cheap enough to run after every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogStatistics {
    pub total: usize,
    /// Entries whose timestamp falls on the same UTC calendar date as "now"
    pub today: usize,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub success: usize,
    pub page_access: usize,
    pub data_change: usize,
    pub system_config: usize,
    pub user_action: usize,
}

impl LogStatistics {
    /// Sweep `entries` once, counting per level, per category, and per day
    pub fn compute<'a, I>(entries: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let today = now.date_naive();
        let mut stats = Self::default();

        for entry in entries {
            stats.total += 1;
            if entry.timestamp.date_naive() == today {
                stats.today += 1;
            }
            match entry.level {
                LogLevel::Info => stats.info += 1,
                LogLevel::Warning => stats.warning += 1,
                LogLevel::Error => stats.error += 1,
                LogLevel::Success => stats.success += 1,
            }
            match entry.category {
                LogCategory::PageAccess => stats.page_access += 1,
                LogCategory::DataChange => stats.data_change += 1,
                LogCategory::SystemConfig => stats.system_config += 1,
                LogCategory::UserAction => stats.user_action += 1,
            }
        }

        stats
    }

    #[must_use]
    pub fn level_count(&self, level: LogLevel) -> usize {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warning => self.warning,
            LogLevel::Error => self.error,
            LogLevel::Success => self.success,
        }
    }

    #[must_use]
    pub fn category_count(&self, category: LogCategory) -> usize {
        match category {
            LogCategory::PageAccess => self.page_access,
            LogCategory::DataChange => self.data_change,
            LogCategory::SystemConfig => self.system_config,
            LogCategory::UserAction => self.user_action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoilog_core::EventDraft;
    use chrono::{Duration, TimeZone};

    #[test]
    fn counts_levels_categories_and_today() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        let yesterday = now - Duration::days(1);

        let entries = vec![
            EventDraft::new(LogLevel::Info, LogCategory::PageAccess, "a").into_entry(1, now),
            EventDraft::new(LogLevel::Error, LogCategory::SystemConfig, "b").into_entry(2, now),
            EventDraft::new(LogLevel::Error, LogCategory::DataChange, "c").into_entry(3, yesterday),
            EventDraft::new(LogLevel::Success, LogCategory::UserAction, "d").into_entry(4, now),
        ];

        let stats = LogStatistics::compute(entries.iter(), now);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.today, 3);
        assert_eq!(stats.info, 1);
        assert_eq!(stats.error, 2);
        assert_eq!(stats.warning, 0);
        assert_eq!(stats.success, 1);
        assert_eq!(stats.page_access, 1);
        assert_eq!(stats.system_config, 1);
        assert_eq!(stats.data_change, 1);
        assert_eq!(stats.user_action, 1);

        assert_eq!(stats.level_count(LogLevel::Error), 2);
        assert_eq!(stats.category_count(LogCategory::UserAction), 1);
    }

    #[test]
    fn empty_log_yields_zeroed_stats() {
        let stats = LogStatistics::compute(std::iter::empty(), Utc::now());
        assert_eq!(stats, LogStatistics::default());
    }

    #[test]
    fn per_level_counts_sum_to_total() {
        let now = Utc::now();
        let entries: Vec<_> = LogLevel::ALL
            .iter()
            .cycle()
            .take(11)
            .enumerate()
            .map(|(i, level)| {
                EventDraft::new(*level, LogCategory::UserAction, "e").into_entry(i as u64 + 1, now)
            })
            .collect();

        let stats = LogStatistics::compute(entries.iter(), now);
        assert_eq!(
            stats.info + stats.warning + stats.error + stats.success,
            stats.total
        );
    }
}
