//! Pagination over filtered entries

use aoilog_core::LogEntry;

/// One page of filtered entries plus the totals the pager needs
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<LogEntry>,
    pub total_count: usize,
    pub page_count: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl Page {
    /// 1-based index of the first row on this page, 0 when the page is empty
    #[must_use]
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page_index - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last row on this page, 0 when the page is empty
    #[must_use]
    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_row() + self.items.len() - 1
        }
    }
}

/// Number of pages needed for `total_count` entries, at least 1
#[must_use]
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    if total_count == 0 {
        1
    } else {
        total_count.div_ceil(size)
    }
}

/// Slice one page out of an already-filtered sequence
///
/// `page_index` is 1-based; the end of the slice is clamped to the input
/// length, so a partially filled last page is returned as-is and a page past
/// the end comes back empty. Bounds checking of navigation happens in the
/// pager, not here.
#[must_use]
pub fn paginate(entries: &[LogEntry], page_index: usize, page_size: usize) -> Page {
    let size = page_size.max(1);
    let index = page_index.max(1);
    let total_count = entries.len();

    let start = (index - 1) * size;
    let end = (start + size).min(total_count);
    let items = if start >= total_count {
        Vec::new()
    } else {
        entries[start..end].to_vec()
    };

    Page {
        items,
        total_count,
        page_count: page_count(total_count, size),
        page_index: index,
        page_size: size,
    }
}

/// Navigation transition for the pagination cursor
///
/// Transitions clamp at the boundaries: `Prev` on the first page and `Next`
/// on the last page stay in place rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

impl PageNav {
    /// Apply the transition to a 1-based cursor within `[1, page_count]`
    #[must_use]
    pub fn apply(self, page_index: usize, page_count: usize) -> usize {
        let count = page_count.max(1);
        let index = page_index.clamp(1, count);
        match self {
            PageNav::First => 1,
            PageNav::Prev => index.saturating_sub(1).max(1),
            PageNav::Next => (index + 1).min(count),
            PageNav::Last => count,
        }
    }
}
