//! Filter expression builder for pages list queries.

use chrono::Days;
use common::{dates::{start_of_day_iso, utc_calendar_day}, list_query::FilterDetail};

use crate::{config::ListSchema, error::ListQueryError, sp_utils::odata::quote};


/// Build the `$filter` expression for a folder, a free-text search and the
/// active column filters.
///
/// Fragments are joined with `and` in this order: folder and item-type
/// predicate, search group, then one group per active filter in collection
/// order. Filters without values contribute nothing.
pub fn build_filter_expression(
    schema: &ListSchema,
    folder_path: &str,
    search_text: &str,
    filters: &[FilterDetail],
) -> Result<String, ListQueryError> {
    let mut terms = vec![format!(
        "startswith({}, {}) and {} eq 0",
        schema.folder_field,
        quote(folder_path),
        schema.object_type_field,
    )];

    if !search_text.is_empty() {
        let search = quote(search_text);
        terms.push(format!(
            "(substringof({search}, {}) or {} eq {search} or substringof({search}, {}))",
            schema.title_field, schema.article_id_field, schema.modified_field,
        ));
    }

    for filter in filters.iter().filter(|f| f.is_active()) {
        let group = if filter.column == schema.category_column {
            filter
                .values
                .iter()
                .map(|value| format!("{} eq {}", schema.tag_term_field, quote(value)))
                .collect::<Vec<_>>()
                .join(" or ")
        } else if filter.column == schema.date_column {
            filter
                .values
                .iter()
                .map(|value| day_range_predicate(schema, &filter.column, value))
                .collect::<Result<Vec<_>, _>>()?
                .join(" or ")
        } else {
            filter
                .values
                .iter()
                .map(|value| format!("{} eq {}", filter.column, quote(value)))
                .collect::<Vec<_>>()
                .join(" or ")
        };
        terms.push(format!("({group})"));
    }

    Ok(terms.join(" and "))
}

/// `[start of day, start of next day)` on the modified field.
fn day_range_predicate(schema: &ListSchema, column: &str, value: &str) -> Result<String, ListQueryError> {
    let invalid = || ListQueryError::InvalidFilter { column: column.to_string(), value: value.to_string() };
    let day = utc_calendar_day(value).ok_or_else(invalid)?;
    let next_day = day.checked_add_days(Days::new(1)).ok_or_else(invalid)?;
    Ok(format!(
        "{field} ge datetime'{}' and {field} lt datetime'{}'",
        start_of_day_iso(day),
        start_of_day_iso(next_day),
        field = schema.modified_field,
    ))
}
