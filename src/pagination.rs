//! Page arithmetic for paginated listings
//!
//! Paginated endpoints answer with `{ items, pagination: { page, page_size,
//! total } }`. [`Pager`] tracks the page a view is showing and refuses to move
//! outside `1..=total_pages`.

use serde::{Deserialize, Serialize};

/// Pagination block returned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }
}

/// A page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// `max(1, ceil(total / page_size))`; a zero page size yields a single page.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Current-page cursor for a listing view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    page_size: u32,
    total: u64,
}

impl Pager {
    /// Start on page 1 with nothing known about the total
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    /// `Some(page)` when `page` lies within `1..=total_pages`, else `None`.
    pub fn target(&self, page: u32) -> Option<u32> {
        (1..=self.total_pages()).contains(&page).then_some(page)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Adopt the pagination block of a freshly loaded page
    pub fn update(&mut self, pagination: &Pagination) {
        self.page = pagination.page.max(1);
        if pagination.page_size > 0 {
            self.page_size = pagination.page_size;
        }
        self.total = pagination.total;
    }
}
