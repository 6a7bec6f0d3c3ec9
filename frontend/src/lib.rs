//! Headless state of the knowledge base view: the term tree, the pages list
//! and the filter panel, driven by the backend loaders.

pub mod app;
pub mod components;
pub mod data_definitions;
