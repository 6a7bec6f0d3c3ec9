//! Shared taxonomy models: terms, term sets, flattened filter options and
//! the category selection a term produces when clicked.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    pub name: String,
    /// 1 when the term was listed without a parent, 2 otherwise.
    pub hierarchy_level: u8,
    pub set_id: String,
    /// Id of the level-1 ancestor. Level-1 terms point at themselves.
    pub main_parent_id: Option<String>,
    /// Name of the level-1 ancestor. Level-1 terms carry their own name.
    pub parent_name: Option<String>,
    pub children: Vec<Term>,
}

impl Term {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted at this term, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|child| child.node_count()).sum::<usize>()
    }

    /// Resolve the category filter this term stands for.
    ///
    /// With a recorded parent name the parent becomes the category and the
    /// term's own name (when different) becomes a secondary filter value.
    /// Without one the term is its own category.
    pub fn category_selection(&self) -> CategorySelection {
        let (category, secondary_filter) = match self.parent_name.as_deref() {
            Some(parent_name) if !parent_name.is_empty() => {
                let secondary = if self.name != parent_name {
                    vec![self.name.clone()]
                } else {
                    vec![]
                };
                (parent_name.to_string(), secondary)
            }
            _ => (self.name.clone(), vec![]),
        };

        CategorySelection {
            category,
            set_id: self.set_id.clone(),
            term_id: self.main_parent_id.clone().unwrap_or_else(|| self.id.clone()),
            secondary_filter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSet {
    pub set_id: String,
    pub set_name: String,
    pub terms: Vec<Term>,
}

impl TermSet {
    pub fn node_count(&self) -> usize {
        self.terms.iter().map(|term| term.node_count()).sum()
    }

    /// Depth-first search for a term by id.
    pub fn find_term(&self, term_id: &str) -> Option<&Term> {
        fn find<'a>(terms: &'a [Term], term_id: &str) -> Option<&'a Term> {
            for term in terms {
                if term.id == term_id {
                    return Some(term);
                }
                if let Some(found) = find(&term.children, term_id) {
                    return Some(found);
                }
            }
            None
        }
        find(&self.terms, term_id)
    }
}

/// One checkable entry of a flat filter-option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterOption {
    pub key: String,
    pub display_text: String,
    pub value: String,
}

impl FilterOption {
    /// Option whose key, text and value are all the same string.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { key: value.clone(), display_text: value.clone(), value }
    }
}

/// Message sent from the term tree to the pages list when a term is clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub category: String,
    pub set_id: String,
    /// Main-parent id of the selected term.
    pub term_id: String,
    pub secondary_filter: Vec<String>,
}

/// Pre-order flattening of every node of every set, roots first.
pub fn flatten_term_sets(sets: &[TermSet]) -> Vec<FilterOption> {
    fn visit(term: &Term, out: &mut Vec<FilterOption>) {
        out.push(FilterOption {
            key: term.id.clone(),
            display_text: term.name.clone(),
            value: term.name.clone(),
        });
        for child in &term.children {
            visit(child, out);
        }
    }

    let mut out = Vec::new();
    for set in sets {
        for term in &set.terms {
            visit(term, &mut out);
        }
    }
    out
}
