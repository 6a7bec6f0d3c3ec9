//! OData literal helpers.

/// Quote a string as an OData string literal, doubling embedded quotes.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
