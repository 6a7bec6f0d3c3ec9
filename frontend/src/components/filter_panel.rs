//! Column filter checklist.

use common::{list_query::FilterDetail, taxonomy::FilterOption};


/// Checklist for one column: the options, the text narrowing them and the
/// values checked so far. Nothing reaches the query until `apply`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanelState {
    column: String,
    options: Vec<FilterOption>,
    search_text: String,
    checked: FilterDetail,
}

impl FilterPanelState {
    /// Open the panel with the column's current filter pre-checked.
    pub fn new(column: impl Into<String>, options: Vec<FilterOption>, current: Option<&FilterDetail>) -> Self {
        let column = column.into();
        let checked = match current {
            Some(detail) => detail.clone(),
            None => FilterDetail::empty(column.clone()),
        };
        Self { column, options, search_text: String::new(), checked }
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Options whose text contains the search text, ignoring case.
    pub fn visible_options(&self) -> Vec<&FilterOption> {
        let needle = self.search_text.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| needle.is_empty() || option.display_text.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.checked.contains(value)
    }

    pub fn check(&mut self, value: &str) {
        self.checked.insert(value);
    }

    pub fn uncheck(&mut self, value: &str) {
        self.checked.remove(value);
    }

    pub fn toggle(&mut self, value: &str) {
        if self.is_checked(value) {
            self.uncheck(value);
        } else {
            self.check(value);
        }
    }

    /// The filter to set on the query.
    pub fn apply(&self) -> FilterDetail {
        self.checked.clone()
    }

    /// Uncheck everything; the returned filter removes the column's filter.
    pub fn clear(&mut self) -> FilterDetail {
        self.checked = FilterDetail::empty(self.column.clone());
        self.search_text.clear();
        self.checked.clone()
    }
}
