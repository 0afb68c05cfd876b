//! Read-side cursor combining a filter with a pagination state

use aoilog_store::SnapshotStore;

use crate::config::EventLogConfig;
use crate::filter::EntryFilter;
use crate::log::EventLog;
use crate::pagination::{page_count, paginate, Page, PageNav};

/// Transient view state for a log table: current filter plus 1-based cursor
///
/// The cursor is never persisted. Changing the filter invalidates the old
/// cursor and resets it to page 1; navigation transitions clamp at the
/// boundaries, so out-of-range requests are absorbed before any slicing
/// happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogView {
    filter: EntryFilter,
    page_index: usize,
    page_size: usize,
}

impl LogView {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: EntryFilter::new(),
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn with_config(config: &EventLogConfig) -> Self {
        Self::new(config.page_size)
    }

    #[must_use]
    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the filter; an actual change resets the cursor to page 1
    pub fn set_filter(&mut self, filter: EntryFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.page_index = 1;
        }
    }

    /// Current page of `log` under the current filter
    ///
    /// Clamps a cursor that ran past the end (entries may have been cleaned
    /// up since the last render) before slicing.
    pub fn page<S: SnapshotStore>(&mut self, log: &EventLog<S>) -> Page {
        let filtered = log.query(&self.filter);
        let count = page_count(filtered.len(), self.page_size);
        self.page_index = self.page_index.min(count);
        paginate(&filtered, self.page_index, self.page_size)
    }

    /// Apply a navigation transition and return the resulting page
    pub fn navigate<S: SnapshotStore>(&mut self, log: &EventLog<S>, nav: PageNav) -> Page {
        let filtered = log.query(&self.filter);
        let count = page_count(filtered.len(), self.page_size);
        self.page_index = nav.apply(self.page_index, count);
        paginate(&filtered, self.page_index, self.page_size)
    }
}
