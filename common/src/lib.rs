//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod taxonomy;
pub mod list_item;
pub mod list_query;
pub mod list_const;
pub mod distinct_values;
pub mod pagination;
pub mod dates;
