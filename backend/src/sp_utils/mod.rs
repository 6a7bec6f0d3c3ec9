//! Plumbing shared by the taxonomy and list item REST clients.

pub mod odata;
pub mod rest_client;
