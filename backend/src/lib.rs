//! Backend: term store and pages list access over the site's REST api.

pub mod api;
pub mod config;
pub mod error;
pub mod sp_utils;

use std::sync::Arc;

use crate::{
    api::{
        list_items::{PagedListQuery, SharePointListItemsApi},
        taxonomy::{SharePointTaxonomyApi, TermHierarchyLoader},
    },
    config::{ListSchema, SiteConfig},
    sp_utils::rest_client::SharePointRestClient,
};

/// Loader and list query wired to the live site described by `config`.
pub fn connect(config: &SiteConfig) -> (TermHierarchyLoader, PagedListQuery) {
    let client = SharePointRestClient::new(config.site_url.clone());
    let loader = TermHierarchyLoader::new(
        Arc::new(SharePointTaxonomyApi::new(client.clone())),
        config.term_tree_max_depth,
    );
    let pages = PagedListQuery::new(
        Arc::new(SharePointListItemsApi::new(client, config.pages_list.clone())),
        ListSchema::default(),
    );
    (loader, pages)
}
