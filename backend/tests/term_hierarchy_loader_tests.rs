//! Term tree loading against an in-memory term store.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use backend::{
    api::taxonomy::{
        TaxonomyApi, TermHierarchyLoader,
        taxonomy_api::{LocalizedName, TermGroupRecord, TermLabel, TermRecord, TermSetRecord},
    },
    error::TaxonomyError,
};
use common::taxonomy::{Term, TermSet};

type ChildKey = (String, Option<String>);

#[derive(Default)]
struct FakeTermStore {
    groups: Vec<TermGroupRecord>,
    sets: HashMap<String, Vec<TermSetRecord>>,
    children: HashMap<ChildKey, Vec<TermRecord>>,
    failing_children: HashSet<ChildKey>,
    failing_set_names: HashSet<String>,
    slow_children: HashMap<ChildKey, Duration>,
    child_calls: Mutex<usize>,
}

impl FakeTermStore {
    fn with_set(mut self, group_id: &str, set_id: &str, names: &[&str]) -> Self {
        self.sets.entry(group_id.to_string()).or_default().push(TermSetRecord {
            id: set_id.to_string(),
            localized_names: names
                .iter()
                .map(|n| LocalizedName { name: n.to_string(), language_tag: None })
                .collect(),
        });
        self
    }

    fn with_children(mut self, set_id: &str, parent: Option<&str>, terms: &[(&str, &str, u64)]) -> Self {
        let records = terms
            .iter()
            .map(|(id, name, children_count)| TermRecord {
                id: id.to_string(),
                labels: vec![TermLabel { name: name.to_string(), is_default: Some(true), language_tag: None }],
                children_count: *children_count,
            })
            .collect();
        self.children.insert((set_id.to_string(), parent.map(String::from)), records);
        self
    }

    fn slow_children_of(mut self, set_id: &str, parent: &str, delay: Duration) -> Self {
        self.slow_children.insert((set_id.to_string(), Some(parent.to_string())), delay);
        self
    }

    fn failing_children_of(mut self, set_id: &str, parent: &str) -> Self {
        self.failing_children.insert((set_id.to_string(), Some(parent.to_string())));
        self
    }
}

#[async_trait]
impl TaxonomyApi for FakeTermStore {
    async fn list_groups(&self) -> anyhow::Result<Vec<TermGroupRecord>> {
        Ok(self.groups.clone())
    }

    async fn list_term_sets(&self, group_id: &str) -> anyhow::Result<Vec<TermSetRecord>> {
        Ok(self.sets.get(group_id).cloned().unwrap_or_default())
    }

    async fn find_term_sets_by_name(&self, group_id: &str, set_name: &str) -> anyhow::Result<Vec<TermSetRecord>> {
        if self.failing_set_names.contains(set_name) {
            anyhow::bail!("Error: 500 Internal Server Error: term store unavailable");
        }
        Ok(self
            .sets
            .get(group_id)
            .map(|sets| sets.iter().filter(|s| s.has_name(set_name)).cloned().collect())
            .unwrap_or_default())
    }

    async fn list_children(&self, set_id: &str, parent_term_id: Option<&str>) -> anyhow::Result<Vec<TermRecord>> {
        *self.child_calls.lock().unwrap() += 1;
        let key = (set_id.to_string(), parent_term_id.map(String::from));
        if let Some(delay) = self.slow_children.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_children.contains(&key) {
            anyhow::bail!("Error: 404 Not Found: term {:?}", parent_term_id);
        }
        Ok(self.children.get(&key).cloned().unwrap_or_default())
    }
}

/// Departments set: HR > Hiring > Interviews, HR > Payroll, Finance.
fn departments_store() -> FakeTermStore {
    FakeTermStore::default()
        .with_set("g1", "s-dept", &["Departments", "Abteilungen"])
        .with_children("s-dept", None, &[("hr", "HR", 2), ("fin", "Finance", 0)])
        .with_children("s-dept", Some("hr"), &[("hiring", "Hiring", 1), ("payroll", "Payroll", 0)])
        .with_children("s-dept", Some("hiring"), &[("interviews", "Interviews", 0)])
}

fn loader(store: FakeTermStore) -> TermHierarchyLoader {
    TermHierarchyLoader::new(Arc::new(store), 8)
}

fn names(terms: &[Term]) -> Vec<&str> {
    terms.iter().map(|t| t.name.as_str()).collect()
}

fn walk<'a>(terms: &'a [Term], root: &'a Term, out: &mut Vec<(&'a Term, &'a Term)>) {
    for term in terms {
        out.push((term, root));
        walk(&term.children, root, out);
    }
}

#[tokio::test]
async fn test_loads_full_tree_in_listing_order() {
    let sets = loader(departments_store()).load_term_sets("g1", &["Departments".to_string()]).await;
    assert_eq!(sets.len(), 1);
    let set = &sets[0];
    assert_eq!(set.set_id, "s-dept");
    assert_eq!(set.set_name, "Departments");
    assert_eq!(names(&set.terms), vec!["HR", "Finance"]);
    assert_eq!(names(&set.terms[0].children), vec!["Hiring", "Payroll"]);
    assert_eq!(names(&set.terms[0].children[0].children), vec!["Interviews"]);
    assert!(set.terms[1].is_leaf());
    assert_eq!(set.node_count(), 5);
}

#[tokio::test]
async fn test_every_descendant_points_at_level_one_ancestor() {
    let sets = loader(departments_store()).load_term_sets("g1", &["Departments".to_string()]).await;
    let set = &sets[0];

    for root in &set.terms {
        assert_eq!(root.hierarchy_level, 1);
        assert_eq!(root.main_parent_id.as_deref(), Some(root.id.as_str()));
        assert_eq!(root.parent_name.as_deref(), Some(root.name.as_str()));

        let mut descendants = Vec::new();
        walk(&root.children, root, &mut descendants);
        for (term, ancestor) in descendants {
            assert_eq!(term.hierarchy_level, 2, "{}", term.name);
            assert_eq!(term.main_parent_id.as_deref(), Some(ancestor.id.as_str()));
            assert_eq!(term.parent_name.as_deref(), Some(ancestor.name.as_str()));
            assert_eq!(term.set_id, "s-dept");
        }
    }
}

#[tokio::test]
async fn test_flatten_yields_every_node_preorder() {
    let loader = loader(departments_store());
    let sets = loader.load_term_sets("g1", &["Departments".to_string()]).await;
    let options = loader.flatten(&sets);
    assert_eq!(options.len(), 5);
    let keys: Vec<_> = options.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["hr", "hiring", "interviews", "payroll", "fin"]);
}

#[tokio::test]
async fn test_failed_child_listing_degrades_that_subtree_only() {
    let store = departments_store().failing_children_of("s-dept", "hiring");
    let sets = loader(store).load_term_sets("g1", &["Departments".to_string()]).await;
    let hr = &sets[0].terms[0];
    assert_eq!(names(&hr.children), vec!["Hiring", "Payroll"]);
    assert!(hr.children[0].children.is_empty());
    assert_eq!(names(&sets[0].terms), vec!["HR", "Finance"]);
}

#[tokio::test]
async fn test_failed_root_listing_gives_empty_set() {
    let mut store = FakeTermStore::default().with_set("g1", "s-empty", &["Empty"]);
    store.failing_children.insert(("s-empty".to_string(), None));
    let sets = loader(store).load_term_sets("g1", &["Empty".to_string()]).await;
    assert_eq!(sets.len(), 1);
    assert!(sets[0].terms.is_empty());
}

#[tokio::test]
async fn test_unresolvable_sets_are_dropped() {
    let mut store = departments_store()
        .with_set("g1", "s-region", &["Regions"])
        .with_children("s-region", None, &[("emea", "EMEA", 0)]);
    store.failing_set_names.insert("Broken".to_string());

    let requested = ["Missing", "Departments", "Broken", "Regions"].map(String::from);
    let sets: Vec<TermSet> = loader(store).load_term_sets("g1", &requested).await;
    let set_names: Vec<_> = sets.iter().map(|s| s.set_name.as_str()).collect();
    assert_eq!(set_names, vec!["Departments", "Regions"]);
}

#[tokio::test]
async fn test_resolve_matches_localized_names_exactly() {
    let loader = loader(departments_store());
    let record = loader.resolve_term_set("g1", "Abteilungen").await.unwrap();
    assert_eq!(record.id, "s-dept");

    let err = loader.resolve_term_set("g1", "departments").await.unwrap_err();
    assert!(matches!(err, TaxonomyError::SetNotFound { .. }));
}

#[tokio::test]
async fn test_cycle_is_cut() {
    let store = FakeTermStore::default()
        .with_set("g1", "s-loop", &["Loop"])
        .with_children("s-loop", None, &[("a", "A", 1)])
        .with_children("s-loop", Some("a"), &[("b", "B", 1)])
        .with_children("s-loop", Some("b"), &[("a", "A", 1)]);
    let sets = loader(store).load_term_sets("g1", &["Loop".to_string()]).await;
    let a = &sets[0].terms[0];
    let b = &a.children[0];
    assert_eq!(b.name, "B");
    assert_eq!(b.children.len(), 1);
    assert!(b.children[0].is_leaf());
    assert_eq!(b.children[0].main_parent_id.as_deref(), Some("a"));
}

/// `shared` sits under both roots and has one child of its own.
fn shared_term_store() -> FakeTermStore {
    FakeTermStore::default()
        .with_set("g1", "s-shared", &["Shared"])
        .with_children("s-shared", None, &[("p1", "P1", 1), ("p2", "P2", 1)])
        .with_children("s-shared", Some("p1"), &[("shared", "Shared", 1)])
        .with_children("s-shared", Some("p2"), &[("shared", "Shared", 1)])
        .with_children("s-shared", Some("shared"), &[("leaf", "Leaf", 0)])
}

fn shared_child_counts(sets: &[TermSet]) -> (usize, usize) {
    let roots = &sets[0].terms;
    (roots[0].children[0].children.len(), roots[1].children[0].children.len())
}

#[tokio::test]
async fn test_term_under_two_parents_is_expanded_under_both() {
    let sets = loader(shared_term_store()).load_term_sets("g1", &["Shared".to_string()]).await;
    assert_eq!(shared_child_counts(&sets), (1, 1));
    assert_eq!(sets[0].terms[1].children[0].children[0].main_parent_id.as_deref(), Some("p2"));
}

#[tokio::test]
async fn test_tree_does_not_depend_on_listing_order() {
    let quick = loader(shared_term_store()).load_term_sets("g1", &["Shared".to_string()]).await;

    let store = shared_term_store().slow_children_of("s-shared", "p1", Duration::from_millis(50));
    let slow = loader(store).load_term_sets("g1", &["Shared".to_string()]).await;

    assert_eq!(shared_child_counts(&slow), (1, 1));
    assert_eq!(slow, quick);
}

#[tokio::test]
async fn test_term_listed_under_itself_is_not_expanded_again() {
    let store = FakeTermStore::default()
        .with_set("g1", "s-self", &["Self"])
        .with_children("s-self", None, &[("a", "A", 1)])
        .with_children("s-self", Some("a"), &[("a", "A", 1)]);
    let sets = loader(store).load_term_sets("g1", &["Self".to_string()]).await;
    let a = &sets[0].terms[0];
    assert_eq!(a.children.len(), 1);
    assert!(a.children[0].is_leaf());
}

#[tokio::test]
async fn test_depth_is_capped() {
    let store = departments_store();
    let loader = TermHierarchyLoader::new(Arc::new(store), 2);
    let sets = loader.load_term_sets("g1", &["Departments".to_string()]).await;
    let hiring = &sets[0].terms[0].children[0];
    assert_eq!(hiring.name, "Hiring");
    assert!(hiring.is_leaf());
}

#[tokio::test]
async fn test_leaves_are_not_listed() {
    let store = Arc::new(departments_store());
    let loader = TermHierarchyLoader::new(store.clone(), 8);
    loader.load_term_sets("g1", &["Departments".to_string()]).await;
    // roots, HR, Hiring
    assert_eq!(*store.child_calls.lock().unwrap(), 3);
}

#[tokio::test]
async fn test_discovery() {
    let mut store = departments_store().with_set("g1", "s-region", &["Regions"]);
    store.groups = vec![TermGroupRecord { id: "g1".to_string(), name: "Knowledge Base".to_string() }];
    let loader = loader(store);

    let groups = loader.list_groups().await.unwrap();
    assert_eq!(groups[0].name, "Knowledge Base");
    assert_eq!(loader.list_term_set_names("g1").await.unwrap(), vec!["Departments", "Regions"]);
    assert!(loader.list_term_set_names("nope").await.unwrap().is_empty());
}
