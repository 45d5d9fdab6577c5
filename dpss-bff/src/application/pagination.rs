//! Offset pagination over fully fetched lists

use crate::domain::Pagination;

use super::errors::{ViewError, ViewResult};

/// A validated `page`/`page_size` pair; both are 1-based and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> ViewResult<Self> {
        if page == 0 {
            return Err(ViewError::bad_request("page must be at least 1"));
        }
        if page_size == 0 {
            return Err(ViewError::bad_request("page_size must be at least 1"));
        }
        Ok(Self { page, page_size })
    }

    /// Request from optional query values, falling back to page 1 and the
    /// view's own page size.
    pub fn from_query(
        page: Option<u32>,
        page_size: Option<u32>,
        default_page_size: u32,
    ) -> ViewResult<Self> {
        Self::new(page.unwrap_or(1), page_size.unwrap_or(default_page_size))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }

    /// Items `[(page-1)*page_size, page*page_size)`, clamped to the list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size as usize).min(items.len());
        &items[start..end]
    }

    pub fn pagination(&self, total: u64) -> Pagination {
        Pagination {
            page: self.page,
            page_size: self.page_size,
            total,
        }
    }
}
