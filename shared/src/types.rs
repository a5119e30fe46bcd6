//! Core shared data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A word that has been accepted and durably recorded.
///
/// Records are created once per accepted submission and never mutated or
/// deleted afterwards. The `word` value is unique across the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWord {
    /// Store-assigned identifier, unique and monotonically increasing
    pub id: u64,

    /// The submitted word itself (unique, non-empty)
    pub word: String,

    /// When the submission was accepted
    pub submitted_at: DateTime<Utc>,
}

/// One page of search results plus the information needed to paginate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Items on this page, most recent first
    pub items: Vec<T>,

    /// Total matches across all pages (post-filter)
    pub total_count: usize,

    /// 1-indexed page number this result represents
    pub page: usize,

    /// Requested page size
    pub page_size: usize,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: usize, page: usize, page_size: usize) -> Self {
        Self {
            items,
            total_count,
            page,
            page_size,
        }
    }

    /// Number of pages needed to cover `total_count` items
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let result: PagedResult<u32> = PagedResult::new(vec![], 21, 1, 10);
        assert_eq!(result.total_pages(), 3);

        let exact: PagedResult<u32> = PagedResult::new(vec![], 20, 1, 10);
        assert_eq!(exact.total_pages(), 2);
    }

    #[test]
    fn test_page_navigation_flags() {
        let first: PagedResult<u32> = PagedResult::new(vec![], 25, 1, 10);
        assert!(first.has_next_page());
        assert!(!first.has_previous_page());

        let last: PagedResult<u32> = PagedResult::new(vec![], 25, 3, 10);
        assert!(!last.has_next_page());
        assert!(last.has_previous_page());
    }

    #[test]
    fn test_zero_page_size_has_no_pages() {
        let result: PagedResult<u32> = PagedResult::new(vec![], 5, 1, 0);
        assert_eq!(result.total_pages(), 0);
    }
}
