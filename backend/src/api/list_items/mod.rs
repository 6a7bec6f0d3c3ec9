//! Pages list querying and module exports.

pub mod list_filter;
pub mod list_items_api;

mod paged_list_query;
pub use paged_list_query::PagedListQuery;

pub use list_items_api::{ListItemsApi, ListItemsRequest, SharePointListItemsApi};
