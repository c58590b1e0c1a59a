//! ListPager - pagination and page-size selection for ordered collections
//!
//! Both tables in the app (wallets, balances) share this state machine
//! instead of re-deriving slices ad hoc.

/// One page of a paginated collection
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Pagination state for a single list.
///
/// `page` is 1-based. The invariant `page <= total_pages` is restored by
/// `clamp` whenever the item count or page size changes; out-of-range
/// navigation is a no-op rather than an error.
#[derive(Clone, Debug)]
pub struct ListPager {
    sizes: &'static [usize],
    per_page: usize,
    page: usize,
    reset_on_size_change: bool,
}

impl ListPager {
    /// `sizes` is the caller-declared allowed set of page sizes; the
    /// first entry is the initial page size.
    pub fn new(sizes: &'static [usize]) -> Self {
        debug_assert!(!sizes.is_empty());
        ListPager {
            sizes,
            per_page: sizes[0],
            page: 1,
            reset_on_size_change: true,
        }
    }

    /// Clamp the current page instead of resetting it when the page
    /// size changes.
    #[allow(dead_code)]
    pub fn clamp_on_size_change(mut self) -> Self {
        self.reset_on_size_change = false;
        self
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sizes(&self) -> &'static [usize] {
        self.sizes
    }

    /// Total pages for a collection of `len` items; at least 1 even
    /// when the collection is empty.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page).max(1)
    }

    /// Pure slice of the current page. Idempotent for identical inputs.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let total_pages = self.total_pages(items.len());
        let start = (self.page - 1).saturating_mul(self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());
        Page {
            items: &items[start..end],
            total_pages,
        }
    }

    /// Change the page size. Values outside the allowed set are
    /// ignored. Resets to page 1 (or clamps, per configuration).
    pub fn set_per_page(&mut self, value: usize, len: usize) {
        if !self.sizes.contains(&value) {
            return;
        }
        self.per_page = value;
        if self.reset_on_size_change {
            self.page = 1;
        } else {
            self.clamp(len);
        }
    }

    /// Cycle to the next allowed page size (keyboard-driven picker)
    pub fn cycle_per_page(&mut self, len: usize) {
        let pos = self.sizes.iter().position(|&s| s == self.per_page).unwrap_or(0);
        let next = self.sizes[(pos + 1) % self.sizes.len()];
        self.set_per_page(next, len);
    }

    /// Jump to page `n`; no-op when `n` is out of `[1, total_pages]`
    pub fn set_page(&mut self, n: usize, len: usize) {
        if n >= 1 && n <= self.total_pages(len) {
            self.page = n;
        }
    }

    pub fn next_page(&mut self, len: usize) {
        self.set_page(self.page + 1, len);
    }

    pub fn prev_page(&mut self, len: usize) {
        self.set_page(self.page.saturating_sub(1), len);
    }

    /// Restore `page <= total_pages` after the collection shrank or
    /// the page size grew.
    pub fn clamp(&mut self, len: usize) {
        let total = self.total_pages(len);
        if self.page > total {
            self.page = total;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[usize] = &[10, 20, 50, 100];

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn twenty_five_items_at_ten_per_page() {
        let mut pager = ListPager::new(SIZES);
        let data = items(25);

        let page = pager.paginate(&data);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &data[0..10]);

        pager.set_page(3, data.len());
        let page = pager.paginate(&data);
        assert_eq!(page.items, &data[20..25]);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let pager = ListPager::new(SIZES);
        let data: Vec<usize> = Vec::new();
        let page = pager.paginate(&data);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn every_page_full_except_possibly_last() {
        let mut pager = ListPager::new(SIZES);
        let data = items(47);
        let total = pager.total_pages(data.len());
        assert_eq!(total, 5);
        for p in 1..=total {
            pager.set_page(p, data.len());
            let page = pager.paginate(&data);
            if p < total {
                assert_eq!(page.items.len(), pager.per_page());
            } else {
                assert_eq!(page.items.len(), 7);
            }
        }
    }

    #[test]
    fn paginate_is_idempotent() {
        let pager = ListPager::new(SIZES);
        let data = items(33);
        let a = pager.paginate(&data);
        let b = pager.paginate(&data);
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_page_is_rejected() {
        let mut pager = ListPager::new(SIZES);
        let data = items(15);
        pager.set_page(0, data.len());
        assert_eq!(pager.page(), 1);
        pager.set_page(3, data.len());
        assert_eq!(pager.page(), 1);
        pager.set_page(2, data.len());
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn size_change_resets_to_first_page() {
        let mut pager = ListPager::new(SIZES);
        let data = items(100);
        pager.set_page(5, data.len());
        pager.set_per_page(20, data.len());
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.per_page(), 20);
    }

    #[test]
    fn size_change_clamps_when_configured() {
        let mut pager = ListPager::new(SIZES).clamp_on_size_change();
        let data = items(100);
        pager.set_page(10, data.len());
        pager.set_per_page(50, data.len());
        // 100 items at 50/page leaves 2 pages; page 10 clamps to 2
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn foreign_page_size_is_ignored() {
        let mut pager = ListPager::new(SIZES);
        pager.set_per_page(7, 100);
        assert_eq!(pager.per_page(), 10);
    }

    #[test]
    fn clamp_after_collection_shrinks() {
        let mut pager = ListPager::new(SIZES);
        let big = items(50);
        pager.set_page(5, big.len());
        pager.clamp(11);
        assert_eq!(pager.page(), 2);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn cycle_wraps_through_allowed_sizes() {
        let mut pager = ListPager::new(SIZES);
        pager.cycle_per_page(0);
        assert_eq!(pager.per_page(), 20);
        pager.cycle_per_page(0);
        pager.cycle_per_page(0);
        pager.cycle_per_page(0);
        assert_eq!(pager.per_page(), 10);
    }
}
