//! Pagination types

use crate::error::{CatalogError, Result};

/// A request for one zero-based page of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_no: u32,
    page_size: u32,
}

impl PageRequest {
    /// Create a page request
    ///
    /// Fails with `InvalidArgument` when `page_size` is zero.
    pub fn new(page_no: u32, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(CatalogError::invalid_argument(
                "Page size must not be less than one",
            ));
        }

        Ok(Self { page_no, page_size })
    }

    /// Zero-based page number
    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    /// Maximum number of elements on the page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of elements preceding this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page_no) * u64::from(self.page_size)
    }
}

/// One page of an ordered result set plus its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Elements on this page, in result-set order
    pub content: Vec<T>,
    /// Zero-based page number
    pub page_no: u32,
    /// Requested page size (the last page may hold fewer elements)
    pub page_size: u32,
    /// Size of the whole result set
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its content and the request that produced it
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_no: request.page_no,
            page_size: request.page_size,
            total_elements,
        }
    }

    /// Total number of pages (zero for an empty result set)
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.page_size.max(1)))
    }

    /// Whether no page follows this one
    pub fn is_last(&self) -> bool {
        u64::from(self.page_no) + 1 >= self.total_pages()
    }

    /// Convert the content, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_no: self.page_no,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_rejected() {
        let err = PageRequest::new(0, 0).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test]
    fn offset_is_page_times_size() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn first_of_three_pages() {
        let page = Page::new(vec![1, 2], PageRequest::new(0, 2).unwrap(), 5);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.is_last());
    }

    #[test]
    fn trailing_partial_page_is_last() {
        let page = Page::new(vec![5], PageRequest::new(2, 2).unwrap(), 5);
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_last());
    }

    #[test]
    fn empty_result_set_has_no_pages() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 10).unwrap(), 0);
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_last());
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2).unwrap(), 4);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page_no, 1);
        assert_eq!(mapped.page_size, 2);
        assert_eq!(mapped.total_elements, 4);
    }
}
