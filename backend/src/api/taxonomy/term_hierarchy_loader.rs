//! Recursive term tree retrieval.

use std::sync::Arc;

use common::taxonomy::{FilterOption, Term, TermSet, flatten_term_sets};
use futures::{FutureExt, future::{BoxFuture, join_all}};
use tracing::{error, info, warn};

use crate::{
    api::taxonomy::taxonomy_api::{TaxonomyApi, TermGroupRecord, TermSetRecord},
    error::TaxonomyError,
};


/// Level-1 ancestor carried down to every descendant.
#[derive(Debug, Clone)]
struct MainParent {
    id: String,
    name: String,
}

#[derive(Debug, Clone)]
struct ParentRef {
    term_id: String,
    main: MainParent,
    /// Ids from the root down to and including `term_id`.
    path: Arc<Vec<String>>,
}

impl ParentRef {
    fn child(&self, term_id: &str) -> ParentRef {
        let mut path = self.path.as_ref().clone();
        path.push(term_id.to_string());
        ParentRef { term_id: term_id.to_string(), main: self.main.clone(), path: Arc::new(path) }
    }
}

pub struct TermHierarchyLoader {
    api: Arc<dyn TaxonomyApi>,
    max_depth: usize,
}

impl TermHierarchyLoader {
    pub fn new(api: Arc<dyn TaxonomyApi>, max_depth: usize) -> Self {
        Self { api, max_depth: max_depth.max(1) }
    }

    /// Load the full tree of every named set of `group_id`.
    ///
    /// Sets that cannot be resolved are logged and left out; the others are
    /// returned in request order.
    pub async fn load_term_sets(&self, group_id: &str, set_names: &[String]) -> Vec<TermSet> {
        let mut term_sets = Vec::new();
        for set_name in set_names {
            let record = match self.resolve_term_set(group_id, set_name).await {
                Ok(record) => record,
                Err(e) => {
                    error!("Error resolving term set {:?}: {}", set_name, e);
                    continue;
                }
            };
            let terms = self.fetch_terms(&record.id, None, 1).await;
            term_sets.push(TermSet {
                set_name: record.first_name().unwrap_or(set_name).to_string(),
                set_id: record.id,
                terms,
            });
        }
        info!(
            "Loaded {} of {} term sets ({} terms)",
            term_sets.len(),
            set_names.len(),
            term_sets.iter().map(|s| s.node_count()).sum::<usize>()
        );
        term_sets
    }

    /// First set of the group whose localized names contain `set_name` exactly.
    pub async fn resolve_term_set(&self, group_id: &str, set_name: &str) -> Result<TermSetRecord, TaxonomyError> {
        let candidates = self.api.find_term_sets_by_name(group_id, set_name).await?;
        candidates
            .into_iter()
            .find(|set| set.has_name(set_name))
            .ok_or_else(|| TaxonomyError::SetNotFound {
                group_id: group_id.to_string(),
                set_name: set_name.to_string(),
            })
    }

    pub fn flatten(&self, sets: &[TermSet]) -> Vec<FilterOption> {
        flatten_term_sets(sets)
    }

    pub async fn list_groups(&self) -> Result<Vec<TermGroupRecord>, TaxonomyError> {
        Ok(self.api.list_groups().await?)
    }

    /// First localized name of every term set of the group.
    pub async fn list_term_set_names(&self, group_id: &str) -> Result<Vec<String>, TaxonomyError> {
        let sets = self.api.list_term_sets(group_id).await?;
        Ok(sets
            .iter()
            .filter_map(|set| set.first_name())
            .map(|name| name.to_string())
            .collect())
    }

    /// Children of `parent` (roots when `None`) at `depth`, with their subtrees.
    /// A failed listing yields no children for that node only. The result does
    /// not depend on the order in which sibling listings complete.
    fn fetch_terms<'a>(
        &'a self,
        set_id: &'a str,
        parent: Option<ParentRef>,
        depth: usize,
    ) -> BoxFuture<'a, Vec<Term>> {
        async move {
            let parent_term_id = parent.as_ref().map(|p| p.term_id.as_str());
            let records = match self.api.list_children(set_id, parent_term_id).await {
                Ok(records) => records,
                Err(e) => {
                    error!("Error fetching terms for set {} (parent {:?}): {:#}", set_id, parent_term_id, e);
                    return Vec::new();
                }
            };

            let hierarchy_level = if parent.is_some() { 2 } else { 1 };
            let pending = records.into_iter().map(|record| {
                let name = record.display_name();
                let child_parent = match &parent {
                    Some(parent) => parent.child(&record.id),
                    None => ParentRef {
                        term_id: record.id.clone(),
                        main: MainParent { id: record.id.clone(), name: name.clone() },
                        path: Arc::new(vec![record.id.clone()]),
                    },
                };
                let main = child_parent.main.clone();
                let descend = record.children_count > 0 && self.may_descend(parent.as_ref(), set_id, &record.id, depth);

                async move {
                    let children = if descend {
                        self.fetch_terms(set_id, Some(child_parent), depth + 1).await
                    } else {
                        Vec::new()
                    };
                    Term {
                        id: record.id,
                        name,
                        hierarchy_level,
                        set_id: set_id.to_string(),
                        main_parent_id: Some(main.id),
                        parent_name: Some(main.name),
                        children,
                    }
                }
            });
            join_all(pending).await
        }
        .boxed()
    }

    fn may_descend(&self, parent: Option<&ParentRef>, set_id: &str, term_id: &str, depth: usize) -> bool {
        if depth >= self.max_depth {
            warn!("Term {} in set {} is deeper than {} levels, children skipped", term_id, set_id, self.max_depth);
            return false;
        }
        if parent.is_some_and(|p| p.path.iter().any(|id| id == term_id)) {
            warn!("Term {} is its own ancestor in set {}, children skipped", term_id, set_id);
            return false;
        }
        true
    }
}
