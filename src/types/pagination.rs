//! Paging options for repository reads.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// One-based page request, deserializable from a query string.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Rows skipped before this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit()
    }

    /// Page size, kept within `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_no_offset() {
        let params = PaginationParams::default();
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_is_bounded() {
        let params = PaginationParams { page: 3, per_page: 500 };
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 2 * MAX_PAGE_SIZE);

        let params = PaginationParams { page: 1, per_page: 0 };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params: PaginationParams = serde_json::from_str(r#"{"page":4}"#).unwrap();
        assert_eq!(params.page, 4);
        assert_eq!(params.per_page, DEFAULT_PAGE_SIZE);
    }
}
