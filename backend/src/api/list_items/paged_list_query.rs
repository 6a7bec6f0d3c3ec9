//! Filtered, sorted retrieval of the pages list.

use std::sync::Arc;

use common::{distinct_values::distinct_values, list_item::ListItem, list_query::PageQuery};
use tracing::{debug, error, info};

use crate::{
    api::list_items::{
        list_filter::build_filter_expression,
        list_items_api::{ListItemsApi, ListItemsRequest},
    },
    config::ListSchema,
    error::ListQueryError,
};


pub struct PagedListQuery {
    api: Arc<dyn ListItemsApi>,
    schema: ListSchema,
}

impl PagedListQuery {
    pub fn new(api: Arc<dyn ListItemsApi>, schema: ListSchema) -> Self {
        Self { api, schema }
    }

    /// The request `fetch` sends for `query`.
    ///
    /// Page number and size are not part of it: the whole matching set is
    /// requested and sliced by the caller.
    pub fn build_request(&self, query: &PageQuery) -> Result<ListItemsRequest, ListQueryError> {
        let filter = build_filter_expression(&self.schema, &query.folder_path, &query.search_text, &query.filters)?;
        Ok(ListItemsRequest {
            filter,
            select: self.schema.select_fields.clone(),
            expand: vec![self.schema.tag_expand_field.clone()],
            order_by: query.sort.column.clone(),
            direction: query.sort.direction,
        })
    }

    /// Every item matching `query`, in the requested order.
    pub async fn fetch(&self, query: &PageQuery) -> Result<Vec<ListItem>, ListQueryError> {
        let request = self.build_request(query).map_err(|e| {
            error!("Error fetching filtered pages: {}", e);
            ListQueryError::RetrievalFailed(e.into())
        })?;
        debug!(
            filter = %request.filter,
            page = query.page_number,
            page_size = query.page_size,
            "querying pages list"
        );

        match self.api.query_items(&request).await {
            Ok(items) => {
                info!("Fetched {} pages under {}", items.len(), query.folder_path);
                Ok(items)
            }
            Err(e) => {
                error!("Error fetching filtered pages: {:#}", e);
                Err(ListQueryError::RetrievalFailed(e))
            }
        }
    }

    pub fn distinct_values(&self, column: &str, items: &[ListItem]) -> Vec<String> {
        distinct_values(column, items)
    }
}
