//! Shared pages list query models and helpers.

use serde::{Deserialize, Serialize};

use crate::list_const::{DEFAULT_PAGE_SIZE, DEFAULT_SORT_COLUMN};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self { column: DEFAULT_SORT_COLUMN.to_string(), direction: SortDirection::Ascending }
    }
}

impl SortState {
    /// Column header click: the sorted column flips, any other column starts
    /// over at `direction_on_column_change`.
    pub fn toggle(&mut self, column: &str, direction_on_column_change: SortDirection) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column.to_string();
            self.direction = direction_on_column_change;
        }
    }
}

/// Selected values for one column. Values keep the order they were checked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDetail {
    pub column: String,
    pub values: Vec<String>,
}

impl FilterDetail {
    pub fn new(column: impl Into<String>, values: Vec<impl Into<String>>) -> Self {
        let mut detail = Self { column: column.into(), values: Vec::new() };
        for value in values {
            detail.insert(value);
        }
        detail
    }

    pub fn empty(column: impl Into<String>) -> Self {
        Self { column: column.into(), values: Vec::new() }
    }

    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Adds a value unless already present.
    pub fn insert(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.contains(&value) {
            self.values.push(value);
        }
    }

    pub fn remove(&mut self, value: &str) {
        self.values.retain(|v| v != value);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    /// 1-based.
    pub page_number: u64,
    pub page_size: u64,
    pub sort: SortState,
    pub folder_path: String,
    pub search_text: String,
    pub filters: Vec<FilterDetail>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortState::default(),
            folder_path: String::new(),
            search_text: String::new(),
            filters: Vec::new(),
        }
    }
}

impl PageQuery {
    /// Replace the filter for `detail.column`, keeping its position in the
    /// collection. A detail without values removes the column's filter.
    pub fn set_filter(&mut self, detail: FilterDetail) {
        let position = self.filters.iter().position(|f| f.column == detail.column);
        match (position, detail.is_active()) {
            (Some(i), true) => self.filters[i] = detail,
            (Some(i), false) => {
                self.filters.remove(i);
            }
            (None, true) => self.filters.push(detail),
            (None, false) => {}
        }
    }

    pub fn filter_for(&self, column: &str) -> Option<&FilterDetail> {
        self.filters.iter().find(|f| f.column == column)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }
}
