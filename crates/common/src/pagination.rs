//! Pagination helpers for catalog requests.
//!
//! Provides a simple `PageQuery` struct and helpers to normalize inputs.

/// Page request parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub limit: u32,
}

impl PageQuery {
    /// Clamp to sane bounds; page 0 becomes 1, limit stays within 1..=100.
    pub fn normalize(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, 100),
        }
    }

    /// Query-string pairs for the catalog endpoint.
    pub fn to_query(self) -> [(&'static str, String); 2] {
        [("page", self.page.to_string()), ("limit", self.limit.to_string())]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}
