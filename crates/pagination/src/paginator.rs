//! Paginator state and derived page/item arithmetic.

use crate::summary::PageSummary;

/// Pagination state: numbering origin, page size, requested page and total.
///
/// Only the four raw fields are stored. Every derived value is recomputed
/// from them on each call, so nothing can go stale between setter calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    base: i64,
    items_per_page: i64,
    page: i64,
    item_count: Option<i64>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self { base: 1, items_per_page: 1, page: 1, item_count: None }
    }
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested page. Stored verbatim; clamping happens on read.
    pub fn set_page(&mut self, page: i64) -> &mut Self {
        self.page = page;
        self
    }

    /// Set the page numbering origin (1 for 1-based paging, 0 for 0-based).
    pub fn set_base(&mut self, base: i64) -> &mut Self {
        self.base = base;
        self
    }

    /// Set the page size; values below 1 are stored as 1.
    pub fn set_items_per_page(&mut self, items_per_page: i64) -> &mut Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    /// Set the total item count; `None` means unknown, negatives become 0.
    pub fn set_item_count(&mut self, item_count: Option<i64>) -> &mut Self {
        self.item_count = item_count.map(|n| n.max(0));
        self
    }

    pub fn base(&self) -> i64 {
        self.base
    }

    pub fn items_per_page(&self) -> i64 {
        self.items_per_page
    }

    pub fn item_count(&self) -> Option<i64> {
        self.item_count
    }

    /// Zero-based index of the current page, clamped into the valid range
    /// when the item count is known.
    pub(crate) fn page_index(&self) -> i64 {
        let index = self.page.saturating_sub(self.base).max(0);
        match self.page_count() {
            Some(count) => index.min((count - 1).max(0)),
            None => index,
        }
    }

    /// Current page number after clamping.
    pub fn page(&self) -> i64 {
        self.base.saturating_add(self.page_index())
    }

    pub fn first_page(&self) -> i64 {
        self.base
    }

    /// Last page number, or `None` when the item count is unknown.
    ///
    /// An empty collection still reports `base` here even though
    /// `page_count()` is 0.
    pub fn last_page(&self) -> Option<i64> {
        self.page_count()
            .map(|count| self.base.saturating_add((count - 1).max(0)))
    }

    /// Total number of pages, or `None` when the item count is unknown.
    pub fn page_count(&self) -> Option<i64> {
        // items_per_page >= 1 and item_count >= 0, so this is a ceiling division
        self.item_count
            .map(|count| count / self.items_per_page + i64::from(count % self.items_per_page != 0))
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> i64 {
        self.page_index().saturating_mul(self.items_per_page)
    }

    /// Offset of the current page counted from the end of the collection,
    /// for countdown (reverse) paging. `None` when the item count is unknown.
    pub fn countdown_offset(&self) -> Option<i64> {
        self.item_count.map(|count| {
            let consumed = self
                .page_index()
                .saturating_add(1)
                .saturating_mul(self.items_per_page);
            count.saturating_sub(consumed).max(0)
        })
    }

    /// Number of items on the current page. Assumes a full page when the
    /// item count is unknown.
    pub fn length(&self) -> i64 {
        match self.item_count {
            Some(count) => self.items_per_page.min(count - self.offset()),
            None => self.items_per_page,
        }
    }

    /// One-based sequence number of the first item on the page, 0 if empty.
    pub fn first_item_on_page(&self) -> i64 {
        if self.item_count == Some(0) {
            0
        } else {
            self.offset().saturating_add(1)
        }
    }

    /// One-based sequence number of the last item on the page.
    pub fn last_item_on_page(&self) -> i64 {
        self.offset().saturating_add(self.length())
    }

    pub fn is_first(&self) -> bool {
        self.page_index() == 0
    }

    /// Never true while the item count is unknown.
    pub fn is_last(&self) -> bool {
        match self.page_count() {
            Some(count) => self.page_index() >= count - 1,
            None => false,
        }
    }

    /// Snapshot of all derived values.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            base: self.base,
            items_per_page: self.items_per_page,
            item_count: self.item_count,
            page: self.page(),
            first_page: self.first_page(),
            last_page: self.last_page(),
            page_count: self.page_count(),
            offset: self.offset(),
            countdown_offset: self.countdown_offset(),
            length: self.length(),
            first_item_on_page: self.first_item_on_page(),
            last_item_on_page: self.last_item_on_page(),
            is_first: self.is_first(),
            is_last: self.is_last(),
        }
    }
}

/// Build a `Paginator` with the given page size and item count.
///
/// ```
/// let mut p = pagination::pagination(10, 100);
/// p.set_page(2);
/// assert_eq!(p.first_item_on_page(), 11);
/// assert_eq!(p.last_page(), Some(10));
/// ```
pub fn pagination(items_per_page: i64, item_count: impl Into<Option<i64>>) -> Paginator {
    let mut paginator = Paginator::new();
    paginator
        .set_items_per_page(items_per_page)
        .set_item_count(item_count.into());
    paginator
}
