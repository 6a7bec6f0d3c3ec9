//! Column names and page size constants for the pages list.

/// Column whose values are the expanded taxonomy tags of an item.
pub const CATEGORY_COLUMN: &str = "Categories";

/// Column holding the last modification timestamp.
pub const DATE_COLUMN: &str = "Modified";

pub const DEFAULT_SORT_COLUMN: &str = "Created";

pub const PAGE_SIZE_OPTIONS: [u64; 3] = [10, 30, 40];
pub const DEFAULT_PAGE_SIZE: u64 = 10;
