//! The knowledge base view: term tree and pages list wired through the
//! category channel.

use backend::{
    api::{list_items::PagedListQuery, taxonomy::TermHierarchyLoader},
    config::SiteConfig,
};
use tracing::info;

use crate::{
    components::{pages_list::PagesListState, term_tree::TermTreeState},
    data_definitions::{
        capabilities::ListCapabilities,
        category_channel::{CategoryReceiver, category_channel},
    },
};


/// Parent of both components. Owns the receiving end of the category
/// channel, so the pages list only ever sees selections made in this tree.
pub struct KnowledgeBase {
    config: SiteConfig,
    loader: TermHierarchyLoader,
    term_tree: TermTreeState,
    pages_list: PagesListState,
    selections: CategoryReceiver,
}

impl KnowledgeBase {
    pub fn new(
        config: SiteConfig,
        capabilities: ListCapabilities,
        loader: TermHierarchyLoader,
        pages: PagedListQuery,
    ) -> Self {
        let (sender, selections) = category_channel();
        Self {
            term_tree: TermTreeState::new(sender),
            pages_list: PagesListState::new(pages, config.clone(), capabilities),
            config,
            loader,
            selections,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn term_tree(&self) -> &TermTreeState {
        &self.term_tree
    }

    pub fn pages_list(&self) -> &PagesListState {
        &self.pages_list
    }

    pub fn pages_list_mut(&mut self) -> &mut PagesListState {
        &mut self.pages_list
    }

    /// Load the configured term sets and hand their nodes to the pages list
    /// as category filter options.
    pub async fn load_taxonomy(&mut self) {
        self.term_tree
            .load(&self.loader, &self.config.term_group_id, &self.config.term_set_names)
            .await;
        let options = self.term_tree.filter_options();
        info!("Term tree ready, {} filter options", options.len());
        self.pages_list.set_category_options(options);
    }

    /// Click on a term, then let the pages list react.
    pub async fn select_term(&mut self, term_id: &str) -> bool {
        if self.term_tree.select(term_id).is_none() {
            return false;
        }
        self.deliver_selections().await > 0
    }

    /// Hand every queued selection to the pages list, oldest first.
    pub async fn deliver_selections(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(selection) = self.selections.try_recv() {
            self.pages_list.on_category_selected(selection).await;
            delivered += 1;
        }
        delivered
    }
}
