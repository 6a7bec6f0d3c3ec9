//! Client-side pagination over a fully loaded result set.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::list_const::DEFAULT_PAGE_SIZE;


/// Page bookkeeping for a result set that is held entirely in memory.
///
/// Pages are 1-based and there is always at least one page, even for an
/// empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    total_items: u64,
    page_size: u64,
    current_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(total_items: u64, page_size: u64) -> Self {
        Self { total_items, page_size: page_size.max(1), current_page: 1 }
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Move to `page`, clamped into `1..=total_pages`.
    pub fn go_to(&mut self, page: u64) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn first(&mut self) {
        self.go_to(1);
    }

    pub fn last(&mut self) {
        self.go_to(self.total_pages());
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page + 1);
    }

    /// New result set: recount and start over on page 1.
    pub fn set_total_items(&mut self, total_items: u64) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Change the page size and land on `landing_page` (page 1 when `None`).
    pub fn set_page_size(&mut self, page_size: u64, landing_page: Option<u64>) {
        self.page_size = page_size.max(1);
        self.go_to(landing_page.unwrap_or(1));
    }

    /// Index range of the current page within the full result.
    pub fn range(&self) -> Range<usize> {
        let start = self.current_page.saturating_sub(1) * self.page_size;
        let end = (self.current_page * self.page_size).min(self.total_items);
        let start = start.min(end);
        start as usize..end as usize
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// 1-based index of the first item shown, 0 when there is nothing to show.
    pub fn start_index(&self) -> u64 {
        let range = self.range();
        if range.is_empty() { 0 } else { range.start as u64 + 1 }
    }

    /// 1-based index of the last item shown, 0 when there is nothing to show.
    pub fn end_index(&self) -> u64 {
        self.range().end as u64
    }
}

/// Page number typed by the user. Anything that is not a positive number
/// means page 1.
pub fn parse_page_input(input: &str) -> u64 {
    input.trim().parse::<u64>().ok().filter(|page| *page > 0).unwrap_or(1)
}
