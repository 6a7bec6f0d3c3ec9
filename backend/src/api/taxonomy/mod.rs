//! Term store access and term tree loading.

pub mod taxonomy_api;
pub mod term_hierarchy_loader;

pub use taxonomy_api::{SharePointTaxonomyApi, TaxonomyApi};
pub use term_hierarchy_loader::TermHierarchyLoader;
