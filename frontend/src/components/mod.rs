pub mod filter_panel;
pub mod pages_list;
pub mod term_tree;
