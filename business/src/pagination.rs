//! Client-side pagination over an in-memory row collection.
//!
//! [`Pagination`] only tracks `(page_index, page_size, total_rows)`; the rows
//! themselves live with the caller and are sliced through [`Pagination::visible`].
//!
//! Conventions:
//! - an empty collection has `page_count() == 0` and stays on page index 0
//! - out-of-range page indices are clamped, never rejected
//! - changing the page size keeps the first row of the current page in view

use std::fmt;
use std::ops::Range;

use log::debug;
use thiserror::Error;

/// Rows per page, restricted to the sizes offered by the page-size selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Thirty,
    Forty,
    Fifty,
}

impl PageSize {
    pub const ALL: [Self; 5] = [Self::Ten, Self::Twenty, Self::Thirty, Self::Forty, Self::Fifty];

    pub const fn rows(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Thirty => 30,
            Self::Forty => 40,
            Self::Fifty => 50,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported page size {0}, expected one of 10, 20, 30, 40 or 50")]
pub struct PageSizeError(pub usize);

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.rows() == rows)
            .ok_or(PageSizeError(rows))
    }
}

/// Pagination state derived from the row count and user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: PageSize,
    total_rows: usize,
}

impl Pagination {
    /// Starts on the first page with the default page size.
    pub fn new(total_rows: usize) -> Self {
        Self {
            page_index: 0,
            page_size: PageSize::default(),
            total_rows,
        }
    }

    pub fn with_page_size(total_rows: usize, page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
            total_rows,
        }
    }

    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// `ceil(total_rows / page_size)`, zero for an empty collection.
    pub const fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.page_size.rows())
    }

    pub const fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub const fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// Jumps to `page_index`, clamped into `[0, page_count)`.
    pub fn set_page_index(&mut self, page_index: usize) {
        let clamped = page_index.min(self.last_page_index());
        if clamped != page_index {
            debug!(
                "Page index {page_index} out of range, clamped to {clamped} (page count {})",
                self.page_count()
            );
        }
        self.page_index = clamped;
    }

    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    pub fn last_page(&mut self) {
        self.set_page_index(self.last_page_index());
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.page_index -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.page_index += 1;
        }
    }

    /// Changes rows-per-page, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        let top_row = self.page_index * self.page_size.rows();
        debug!(
            "Page size {} -> {page_size}, top row {top_row}",
            self.page_size
        );
        self.page_size = page_size;
        self.set_page_index(top_row / page_size.rows());
    }

    /// Replaces the row count, re-clamping the current page.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.set_page_index(self.page_index);
    }

    /// Index range of the rows on the current page.
    pub fn row_range(&self) -> Range<usize> {
        let start = (self.page_index * self.page_size.rows()).min(self.total_rows);
        let end = (start + self.page_size.rows()).min(self.total_rows);
        start..end
    }

    /// Borrows the current page out of `rows`.
    pub fn visible<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        rows.get(self.row_range()).unwrap_or_default()
    }

    const fn last_page_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }
}
