use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::errors::{Result, ValidationError};

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Result<Self> {
        if page < 1 {
            return Err(ValidationError::InvalidInput(format!(
                "page must be a positive integer, got {}",
                page
            ))
            .into());
        }
        if per_page < 1 {
            return Err(ValidationError::InvalidInput(format!(
                "perPage must be a positive integer, got {}",
                per_page
            ))
            .into());
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of pages needed for `total` rows, never less than one so page
    /// controls stay well-formed on an empty result.
    pub fn total_pages(&self, total: i64) -> i64 {
        let total = total.max(0);
        let pages = total / self.per_page + i64::from(total % self.per_page != 0);
        pages.max(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(PageRequest::new(0, 7).is_err());
        assert!(PageRequest::new(-1, 7).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, -5).is_err());
    }

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.per_page(), 7);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
        assert_eq!(PageRequest::new(1, 10).unwrap().offset(), 0);
    }

    #[test]
    fn test_total_pages() {
        let req = PageRequest::new(1, 7).unwrap();
        assert_eq!(req.total_pages(0), 1);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(7), 1);
        assert_eq!(req.total_pages(8), 2);
        assert_eq!(req.total_pages(60), 9);
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let req = PageRequest::new(2, i64::MAX).unwrap();
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.offset(), i64::MAX);
    }
}
