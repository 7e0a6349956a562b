/// Pagination request parameters for offset-based pagination
///
/// The default window matches the listing cap the UI refreshes against:
/// the 100 newest tickets.
///
/// # Example
/// ```
/// use helpdesk_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(20, 0); // First page with 20 items
/// let second = PageRequest::new(20, 20); // Second page
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items to return
    /// * `offset` - Number of items to skip
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// # Example
    /// ```
    /// use helpdesk_core_db::repository::pagination::PageRequest;
    ///
    /// let page_1 = PageRequest::for_page(20, 1); // offset: 0
    /// let page_2 = PageRequest::for_page(20, 2); // offset: 20
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
        }
    }
}

/// Paginated response containing items and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Maximum number of items per page
    pub limit: usize,
    /// Number of items skipped before this page
    pub offset: usize,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Get the current page number (1-based)
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_caps_at_one_hundred() {
        let page = PageRequest::default();
        assert_eq!(page.limit, 100);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn for_page_converts_to_offsets() {
        assert_eq!(PageRequest::for_page(20, 1).offset, 0);
        assert_eq!(PageRequest::for_page(20, 3).offset, 40);
        // Page numbers below 1 clamp to the first page.
        assert_eq!(PageRequest::for_page(20, 0).offset, 0);
    }

    #[test]
    fn page_metadata() {
        let page = Page::new(vec![1, 2, 3], 10, 3, 3);
        assert!(page.has_more());
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.total_pages(), 4);

        let last = Page::new(vec![10], 10, 3, 9);
        assert!(!last.has_more());
    }
}
