//! Client-side pagination over an in-memory list.

/// Items per page on the list pages.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// What the presentational pagination control needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationProps {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers to render as buttons.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(len / page_size)`; zero for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Move to `page`, clamped to `1..=max(total_pages, 1)`. Returns the page
    /// actually selected.
    pub fn go_to(&mut self, page: usize, len: usize) -> usize {
        let last = self.total_pages(len).max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    /// Re-clamp the current page after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        self.go_to(self.current_page, len);
    }

    /// The items on the current page: `[(K-1)P, min(KP, len))`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn props(&self, len: usize) -> PaginationProps {
        PaginationProps {
            current_page: self.current_page,
            total_pages: self.total_pages(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let pager = Pager::default();
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(5), 1);
        assert_eq!(pager.total_pages(6), 2);
        assert_eq!(pager.total_pages(12), 3);
    }

    #[test]
    fn page_k_shows_its_window() {
        let items: Vec<u32> = (0..12).collect();
        let mut pager = Pager::default();

        assert_eq!(pager.slice(&items), [0, 1, 2, 3, 4]);
        pager.go_to(2, items.len());
        assert_eq!(pager.slice(&items), [5, 6, 7, 8, 9]);
        pager.go_to(3, items.len());
        assert_eq!(pager.slice(&items), [10, 11]);
    }

    #[test]
    fn go_to_clamps_to_existing_pages() {
        let mut pager = Pager::default();
        assert_eq!(pager.go_to(0, 12), 1);
        assert_eq!(pager.go_to(9, 12), 3);
        assert_eq!(pager.go_to(4, 0), 1);
    }

    #[test]
    fn clamp_steps_back_when_last_page_empties() {
        let mut pager = Pager::default();
        pager.go_to(2, 6);
        pager.clamp(5);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn empty_list_yields_empty_slice() {
        let pager = Pager::default();
        let items: [u8; 0] = [];
        assert!(pager.slice(&items).is_empty());
    }

    #[test]
    fn props_report_neighbours() {
        let mut pager = Pager::new(2);
        pager.go_to(2, 5);
        let props = pager.props(5);
        assert_eq!(props, PaginationProps { current_page: 2, total_pages: 3 });
        assert!(props.has_previous());
        assert!(props.has_next());
        assert_eq!(props.pages().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
