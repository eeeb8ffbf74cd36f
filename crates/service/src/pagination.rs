//! Pagination utilities for service layer
//!
//! Listings use fixed pages of [`PAGE_SIZE`] items selected by a 1-based index.

/// Items per page on every listing endpoint
pub const PAGE_SIZE: u32 = 10;

/// 1-based page of [`PAGE_SIZE`] items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    pub fn page(page: u32) -> Self { Self { page } }

    /// 0-based page index and page size as `u64`; page 0 reads as page 1
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.max(1);
        ((page - 1) as u64, PAGE_SIZE as u64)
    }

    /// Number of items preceding this page
    pub fn offset(self) -> u64 {
        let (idx, per_page) = self.normalize();
        idx * per_page
    }
}
