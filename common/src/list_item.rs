//! Shared list item model returned by the pages list query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::list_const::{CATEGORY_COLUMN, DATE_COLUMN};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyTag {
    #[serde(rename = "Term")]
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListItem {
    #[serde(rename = "Id", default)]
    pub id: u64,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "FileLeafRef", default)]
    pub file_leaf_ref: Option<String>,
    #[serde(rename = "FileRef", default)]
    pub file_ref: Option<String>,
    /// Raw ISO 8601 timestamp as sent by the list service.
    #[serde(rename = "Modified", default)]
    pub modified: Option<String>,
    #[serde(rename = "TaxCatchAll", default)]
    pub tags: Vec<TaxonomyTag>,
    #[serde(rename = "Article_x0020_ID", default)]
    pub article_id: Option<serde_json::Value>,
    /// Any other selected column, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ListItem {
    /// Raw string value of a column, `None` when missing or not a scalar.
    ///
    /// The category column has no single value; use [`ListItem::tag_terms`].
    pub fn field_value(&self, column: &str) -> Option<String> {
        match column {
            "Id" | "ID" => Some(self.id.to_string()),
            "Title" => self.title.clone(),
            "Description" => self.description.clone(),
            "FileLeafRef" => self.file_leaf_ref.clone(),
            "FileRef" => self.file_ref.clone(),
            DATE_COLUMN => self.modified.clone(),
            "Article_x0020_ID" => self.article_id.as_ref().and_then(scalar_to_string),
            CATEGORY_COLUMN => None,
            other => self.extra.get(other).and_then(scalar_to_string),
        }
    }

    pub fn tag_terms(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.term.as_str())
    }
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
