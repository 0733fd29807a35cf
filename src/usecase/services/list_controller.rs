use tracing::debug;

use crate::domain::entities::listing::{PageView, SortConfig, SortDirection};
use crate::domain::entities::user::UserRecord;
use crate::domain::pipeline::filter::filter_records;
use crate::domain::pipeline::paginate::{clamp_page, paginate, total_pages};
use crate::domain::pipeline::sort::sort_records;

pub const PAGE_SIZES: [usize; 4] = [5, 10, 15, 20];
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Interaction state of the user table: filter text, sort, page size and page.
///
/// Every transition runs to completion before the next one; the rendered page
/// is always recomputed from scratch by [`ListController::derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListController {
    query: String,
    sort: SortConfig,
    page_size: usize,
    current_page: usize,
}

impl Default for ListController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListController {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort: SortConfig::default(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The requested page, which may lie outside the derived range.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Resets to the first page on every call, whether or not the match count moved.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
        debug!(query = %self.query, "filter query changed");
    }

    /// Same key while ascending flips to descending; anything else starts ascending.
    pub fn request_sort(&mut self, key: &str) {
        let direction = if self.sort.is_active(key) && self.sort.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.sort = SortConfig::by(key, direction);
        debug!(key, ?direction, "sort requested");
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
        debug!(page_size = self.page_size, "page size changed");
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn prev_page(&mut self, total_pages: usize) {
        let page = clamp_page(self.current_page, total_pages);
        self.current_page = page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        let page = clamp_page(self.current_page, total_pages);
        self.current_page = (page + 1).min(total_pages.max(1));
    }

    /// Called when the record collection is replaced.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Direction shown next to `key`'s column header, if it is the active sort.
    pub fn indicator(&self, key: &str) -> Option<SortDirection> {
        self.sort.is_active(key).then_some(self.sort.direction)
    }

    /// filter → sort → clamp → paginate. Pure; safe on an empty collection.
    pub fn derive(&self, records: &[UserRecord]) -> PageView {
        let filtered = filter_records(records, &self.query);
        let sorted = sort_records(filtered, &self.sort);
        let total_pages = total_pages(sorted.len(), self.page_size);
        let current_page = clamp_page(self.current_page, total_pages);

        let rows = paginate(&sorted, self.page_size, current_page)
            .iter()
            .map(|record| (*record).clone())
            .collect();

        PageView {
            rows,
            matched: sorted.len(),
            page_size: self.page_size,
            current_page,
            total_pages,
        }
    }
}
