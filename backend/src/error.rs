//! Error types at the component boundaries.
//!
//! Transport plumbing works with `anyhow::Result`; the loader and the list
//! query convert into these enums so callers can tell the cases apart.

use thiserror::Error;


#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("term set {set_name:?} not found in group {group_id}")]
    SetNotFound { group_id: String, set_name: String },

    #[error("taxonomy request failed: {0:#}")]
    Request(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ListQueryError {
    #[error("invalid filter value {value:?} for column {column}")]
    InvalidFilter { column: String, value: String },

    #[error("error fetching filtered pages")]
    RetrievalFailed(#[source] anyhow::Error),
}
