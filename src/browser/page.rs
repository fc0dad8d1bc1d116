use std::ops::Range;

/// One page of a listing. The index is always clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub per_page: usize,
    pub total_items: usize,
}

impl Page {
    pub fn new(index: usize, per_page: usize, total_items: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page);
        Self {
            index: index.min(total_pages.saturating_sub(1)),
            per_page,
            total_items,
        }
    }

    /// Number of pages; zero for an empty listing.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Indices of the items on this page
    pub fn range(&self) -> Range<usize> {
        let start = (self.index * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }
}
