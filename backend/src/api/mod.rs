//! Remote collaborators and the components built on them.

pub mod taxonomy;
pub mod list_items;
