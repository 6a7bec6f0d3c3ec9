//! Term tree browser state.

use backend::api::taxonomy::TermHierarchyLoader;
use common::taxonomy::{CategorySelection, FilterOption, TermSet};
use tracing::{info, warn};

use crate::data_definitions::category_channel::CategorySender;


pub struct TermTreeState {
    sets: Vec<TermSet>,
    selected_term_id: Option<String>,
    sender: CategorySender,
}

impl TermTreeState {
    pub fn new(sender: CategorySender) -> Self {
        Self { sets: Vec::new(), selected_term_id: None, sender }
    }

    /// Replace the tree with a fresh load of `set_names`.
    pub async fn load(&mut self, loader: &TermHierarchyLoader, group_id: &str, set_names: &[String]) {
        self.sets = loader.load_term_sets(group_id, set_names).await;
        self.selected_term_id = None;
    }

    pub fn set_term_sets(&mut self, sets: Vec<TermSet>) {
        self.sets = sets;
        self.selected_term_id = None;
    }

    pub fn term_sets(&self) -> &[TermSet] {
        &self.sets
    }

    pub fn selected_term_id(&self) -> Option<&str> {
        self.selected_term_id.as_deref()
    }

    /// Every node, pre-order, as checkable options.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        common::taxonomy::flatten_term_sets(&self.sets)
    }

    /// Click on a term: mark it selected and announce its category.
    ///
    /// Unknown ids change nothing and send nothing.
    pub fn select(&mut self, term_id: &str) -> Option<CategorySelection> {
        let Some(term) = self.sets.iter().find_map(|set| set.find_term(term_id)) else {
            warn!("Selected term {} is not in the loaded tree", term_id);
            return None;
        };
        let selection = term.category_selection();
        info!("Term {} selected, category {:?}", term_id, selection.category);

        self.selected_term_id = Some(term_id.to_string());
        self.sender.send(selection.clone());
        Some(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::category_channel::category_channel;
    use common::taxonomy::Term;

    fn term(id: &str, name: &str, level: u8, main: (&str, &str), children: Vec<Term>) -> Term {
        Term {
            id: id.to_string(),
            name: name.to_string(),
            hierarchy_level: level,
            set_id: "s1".to_string(),
            main_parent_id: Some(main.0.to_string()),
            parent_name: Some(main.1.to_string()),
            children,
        }
    }

    fn departments() -> Vec<TermSet> {
        let hiring = term("hiring", "Hiring", 2, ("hr", "HR"), vec![]);
        vec![TermSet {
            set_id: "s1".to_string(),
            set_name: "Departments".to_string(),
            terms: vec![term("hr", "HR", 1, ("hr", "HR"), vec![hiring])],
        }]
    }

    #[test]
    fn test_select_child_sends_parent_category() {
        let (tx, mut rx) = category_channel();
        let mut tree = TermTreeState::new(tx);
        tree.set_term_sets(departments());

        let selection = tree.select("hiring").unwrap();
        assert_eq!(selection.category, "HR");
        assert_eq!(selection.term_id, "hr");
        assert_eq!(selection.secondary_filter, vec!["Hiring"]);
        assert_eq!(tree.selected_term_id(), Some("hiring"));
        assert_eq!(rx.try_recv(), Some(selection));
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn test_select_root_has_no_secondary() {
        let (tx, mut rx) = category_channel();
        let mut tree = TermTreeState::new(tx);
        tree.set_term_sets(departments());

        let selection = tree.select("hr").unwrap();
        assert_eq!(selection.category, "HR");
        assert!(selection.secondary_filter.is_empty());
        assert!(rx.try_recv().is_some());
    }

    #[test]
    fn test_select_unknown_term() {
        let (tx, mut rx) = category_channel();
        let mut tree = TermTreeState::new(tx);
        tree.set_term_sets(departments());

        assert!(tree.select("nope").is_none());
        assert!(tree.selected_term_id().is_none());
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn test_filter_options_pre_order() {
        let (tx, _rx) = category_channel();
        let mut tree = TermTreeState::new(tx);
        tree.set_term_sets(departments());

        let keys: Vec<_> = tree.filter_options().into_iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["hr", "hiring"]);
    }
}
