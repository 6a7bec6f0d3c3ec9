//! Distinct column values over a loaded item set, used to fill filter
//! option checklists.

use std::collections::HashSet;

use crate::{
    dates::utc_calendar_day,
    list_const::{CATEGORY_COLUMN, DATE_COLUMN},
    list_item::ListItem,
    taxonomy::FilterOption,
};


/// Unique values of `column` across `items`, in first-seen order.
///
/// The category column contributes every tag term of every item, the date
/// column contributes `YYYY-MM-DD` UTC days, other columns their raw value.
/// Missing and empty values are skipped, as are dates that do not parse.
pub fn distinct_values(column: &str, items: &[ListItem]) -> Vec<String> {
    let mut present_values = HashSet::new();
    let mut result = Vec::new();
    let mut push = |value: String| {
        if value.is_empty() || present_values.contains(&value) {
            return;
        }
        present_values.insert(value.clone());
        result.push(value);
    };

    for item in items {
        match column {
            CATEGORY_COLUMN => {
                for term in item.tag_terms() {
                    push(term.to_string());
                }
            }
            DATE_COLUMN => {
                let day = item.modified.as_deref().and_then(utc_calendar_day);
                if let Some(day) = day {
                    push(day.format("%Y-%m-%d").to_string());
                }
            }
            _ => {
                if let Some(value) = item.field_value(column) {
                    push(value);
                }
            }
        }
    }
    result
}

pub fn distinct_filter_options(column: &str, items: &[ListItem]) -> Vec<FilterOption> {
    distinct_values(column, items).into_iter().map(FilterOption::from_value).collect()
}
