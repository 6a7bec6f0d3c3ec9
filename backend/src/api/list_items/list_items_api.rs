//! List item read API.

use async_trait::async_trait;
use common::{list_item::ListItem, list_query::SortDirection};

use crate::sp_utils::{odata::quote, rest_client::SharePointRestClient};


/// Everything one items query sends to the list service.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItemsRequest {
    pub filter: String,
    pub select: Vec<String>,
    pub expand: Vec<String>,
    pub order_by: String,
    pub direction: SortDirection,
}

impl ListItemsRequest {
    /// OData query parameters, in the order they are sent.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let direction = if self.direction.is_descending() { "desc" } else { "asc" };
        let mut params = vec![
            ("$filter", self.filter.clone()),
            ("$select", self.select.join(",")),
        ];
        if !self.expand.is_empty() {
            params.push(("$expand", self.expand.join(",")));
        }
        params.push(("$orderby", format!("{} {}", self.order_by, direction)));
        params
    }
}

#[async_trait]
pub trait ListItemsApi: Send + Sync {
    /// Every item matching the request; no server-side limit.
    async fn query_items(&self, request: &ListItemsRequest) -> anyhow::Result<Vec<ListItem>>;
}

#[derive(Debug, Clone)]
pub struct SharePointListItemsApi {
    client: SharePointRestClient,
    list_title: String,
}

impl SharePointListItemsApi {
    pub fn new(client: SharePointRestClient, list_title: impl Into<String>) -> Self {
        Self { client, list_title: list_title.into() }
    }

    pub fn items_url(&self) -> String {
        self.client.api_url(&format!("/_api/web/lists/getByTitle({})/items", quote(&self.list_title)))
    }
}

#[async_trait]
impl ListItemsApi for SharePointListItemsApi {
    async fn query_items(&self, request: &ListItemsRequest) -> anyhow::Result<Vec<ListItem>> {
        let url = self.items_url();
        let params = request.query_params();
        self.client.get_all_values(&url, &params).await
    }
}
