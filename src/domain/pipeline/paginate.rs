//! Pagination stage: fixed-size offset slicing with a view-all bypass.

/// Number of pages needed for `count` items; 0 when there are no items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One slice of an ordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Requested page number (1-based), reported even in view-all mode.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Length of the whole input list.
    pub total_items: usize,
    pub view_all: bool,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        !self.view_all && self.page > 1
    }

    pub fn has_next(&self) -> bool {
        !self.view_all && self.page < self.total_pages
    }
}

/// Slices `items` to the requested page.
///
/// With `view_all` the whole input is returned. Page numbers outside
/// `[1, total_pages]` produce an empty page rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize, view_all: bool) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let slice = if view_all {
        items
    } else if page == 0 || page > total_pages {
        &[]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_pages,
        total_items,
        view_all,
    }
}

/// Current page position of a ranking view.
///
/// The page number never drops below 1. Navigation is clamped against the
/// caller-supplied page count so the state stays valid as the list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    view_all: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            view_all: false,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn view_all(&self) -> bool {
        self.view_all
    }

    /// Moves back one page, stopping at 1.
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Moves forward one page, stopping at `total_pages`.
    pub fn next(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages).max(1);
    }

    /// Jumps to `page` if it lies within `[1, total_pages]`.
    ///
    /// Returns false and leaves the state unchanged otherwise.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if (1..=total_pages).contains(&page) {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn show_all(&mut self) {
        self.view_all = true;
    }

    pub fn show_paginated(&mut self) {
        self.view_all = false;
    }

    /// Returns to page 1 in paginated mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply<T: Clone>(&self, items: &[T], page_size: usize) -> Page<T> {
        paginate(items, self.page, page_size, self.view_all)
    }
}
