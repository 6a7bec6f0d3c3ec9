//! Pages list state: query, fetched items, client-side paging and column
//! filters.

use backend::{api::list_items::PagedListQuery, config::SiteConfig};
use common::{
    distinct_values::distinct_filter_options,
    list_const::{CATEGORY_COLUMN, PAGE_SIZE_OPTIONS},
    list_item::ListItem,
    list_query::{FilterDetail, PageQuery},
    pagination::{Pagination, parse_page_input},
    taxonomy::{CategorySelection, FilterOption},
};
use tracing::{info, warn};

use crate::{
    components::filter_panel::FilterPanelState,
    data_definitions::capabilities::{CategoryPayload, ListCapabilities},
};


pub struct PagesListState {
    pages: PagedListQuery,
    config: SiteConfig,
    capabilities: ListCapabilities,
    query: PageQuery,
    items: Vec<ListItem>,
    pagination: Pagination,
    category: Option<String>,
    category_options: Vec<FilterOption>,
    filter_panel: Option<FilterPanelState>,
    load_failed: bool,
}

impl PagesListState {
    pub fn new(pages: PagedListQuery, config: SiteConfig, capabilities: ListCapabilities) -> Self {
        Self {
            pages,
            config,
            capabilities,
            query: PageQuery::default(),
            items: Vec::new(),
            pagination: Pagination::default(),
            category: None,
            category_options: Vec::new(),
            filter_panel: None,
            load_failed: false,
        }
    }

    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True when the last fetch failed and the list shows the empty state.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Items of the current page.
    pub fn visible_items(&self) -> &[ListItem] {
        self.pagination.slice(&self.items)
    }

    /// Options offered for the category column, taken from the term tree.
    pub fn set_category_options(&mut self, options: Vec<FilterOption>) {
        self.category_options = options;
    }

    /// Scope the list to the selected category and reload.
    ///
    /// Filters, search and sort direction carry over; only the category
    /// filter is replaced by the selection's secondary values when the
    /// payload includes them.
    pub async fn on_category_selected(&mut self, selection: CategorySelection) {
        info!("Showing pages of category {:?}", selection.category);
        self.query.folder_path = self.config.folder_path_for_category(&selection.category);
        if self.capabilities.category_payload == CategoryPayload::WithSecondaryFilter {
            self.query.set_filter(FilterDetail::new(CATEGORY_COLUMN, selection.secondary_filter));
        }
        self.category = Some(selection.category);
        self.filter_panel = None;
        self.refresh().await;
    }

    pub async fn search(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.refresh().await;
    }

    /// Header click on `column`.
    pub async fn toggle_sort(&mut self, column: &str) {
        self.query.sort.toggle(column, self.config.sort_on_column_change);
        self.refresh().await;
    }

    pub async fn apply_filter(&mut self, detail: FilterDetail) {
        self.query.set_filter(detail);
        self.refresh().await;
    }

    /// Drop every column filter and the search text.
    pub async fn reset_filters(&mut self) {
        self.query.clear_filters();
        self.query.search_text.clear();
        self.filter_panel = None;
        self.refresh().await;
    }

    /// Re-run the current query and start over on page 1.
    ///
    /// Without a category there is no folder to list and nothing is fetched.
    pub async fn refresh(&mut self) {
        if self.category.is_none() {
            return;
        }
        match self.pages.fetch(&self.query).await {
            Ok(items) => {
                self.items = items;
                self.load_failed = false;
            }
            Err(e) => {
                warn!("Showing empty pages list: {}", e);
                self.items = Vec::new();
                self.load_failed = true;
            }
        }
        self.pagination.set_total_items(self.items.len() as u64);
        self.sync_page_number();
    }

    pub fn go_to_page(&mut self, page: u64) {
        self.pagination.go_to(page);
        self.sync_page_number();
    }

    /// Page number typed into the pager; anything unusable lands on page 1.
    pub fn go_to_page_input(&mut self, input: &str) {
        self.go_to_page(parse_page_input(input));
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
        self.sync_page_number();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev();
        self.sync_page_number();
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
        self.sync_page_number();
    }

    pub fn last_page(&mut self) {
        self.pagination.last();
        self.sync_page_number();
    }

    /// Change the page size to one of the offered options and go back to
    /// page 1. Other sizes are ignored.
    pub fn set_page_size(&mut self, page_size: u64) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            warn!("Page size {} is not offered", page_size);
            return false;
        }
        self.pagination.set_page_size(page_size, None);
        self.query.page_size = page_size;
        self.sync_page_number();
        true
    }

    /// Options for a column's checklist: term tree nodes for the category
    /// column when loaded, otherwise the column's distinct values.
    pub fn filter_options(&self, column: &str) -> Vec<FilterOption> {
        if column == CATEGORY_COLUMN && !self.category_options.is_empty() {
            return self.category_options.clone();
        }
        distinct_filter_options(column, &self.items)
    }

    /// Open the checklist for `column`. Returns false when the filter panel
    /// is switched off.
    pub fn open_filter_panel(&mut self, column: &str) -> bool {
        if !self.capabilities.filter_panel {
            return false;
        }
        let options = self.filter_options(column);
        self.filter_panel = Some(FilterPanelState::new(column, options, self.query.filter_for(column)));
        true
    }

    pub fn filter_panel(&self) -> Option<&FilterPanelState> {
        self.filter_panel.as_ref()
    }

    pub fn filter_panel_mut(&mut self) -> Option<&mut FilterPanelState> {
        self.filter_panel.as_mut()
    }

    /// Close the checklist and filter on its checked values.
    pub async fn apply_filter_panel(&mut self) {
        if let Some(panel) = self.filter_panel.take() {
            self.apply_filter(panel.apply()).await;
        }
    }

    /// Close the checklist and remove its column's filter.
    pub async fn clear_filter_panel(&mut self) {
        if let Some(mut panel) = self.filter_panel.take() {
            self.apply_filter(panel.clear()).await;
        }
    }

    fn sync_page_number(&mut self) {
        self.query.page_number = self.pagination.current_page();
    }
}
