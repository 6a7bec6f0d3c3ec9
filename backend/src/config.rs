//! Site configuration read from the environment.

use anyhow::Context;
use common::list_const::{CATEGORY_COLUMN, DATE_COLUMN};
use common::list_query::SortDirection;


pub const DEFAULT_SITE_URL: &str = "http://localhost";
pub const DEFAULT_PAGES_LIST: &str = "Site Pages";
pub const DEFAULT_TERM_TREE_MAX_DEPTH: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Absolute url of the web, e.g. `https://contoso.sharepoint.com/sites/kb`.
    pub site_url: String,
    /// Server-relative url of the same web, e.g. `/sites/kb`.
    pub server_relative_url: String,
    pub pages_list: String,
    pub term_group_id: String,
    pub term_set_names: Vec<String>,
    pub term_tree_max_depth: usize,
    pub sort_on_column_change: SortDirection,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            server_relative_url: String::new(),
            pages_list: DEFAULT_PAGES_LIST.to_string(),
            term_group_id: String::new(),
            term_set_names: Vec::new(),
            term_tree_max_depth: DEFAULT_TERM_TREE_MAX_DEPTH,
            sort_on_column_change: SortDirection::Ascending,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let site_url = lookup("SHAREPOINT_SITE_URL")
            .unwrap_or(DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let server_relative_url = match lookup("SHAREPOINT_SERVER_RELATIVE_URL") {
            Some(url) => url,
            None => reqwest::Url::parse(&site_url)
                .context("SHAREPOINT_SITE_URL is not a valid url")?
                .path()
                .to_string(),
        };
        let server_relative_url = server_relative_url.trim_end_matches('/').to_string();

        let term_set_names = lookup("TERM_SET_NAMES")
            .map(|names| {
                names
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let term_tree_max_depth = match lookup("TERM_TREE_MAX_DEPTH") {
            Some(depth) => depth
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TERM_TREE_MAX_DEPTH is not a number: {depth}"))?,
            None => DEFAULT_TERM_TREE_MAX_DEPTH,
        };

        let sort_on_column_change = match lookup("SORT_ON_COLUMN_CHANGE") {
            Some(direction) => direction
                .parse::<SortDirection>()
                .map_err(anyhow::Error::msg)
                .context("SORT_ON_COLUMN_CHANGE must be asc or desc")?,
            None => SortDirection::Ascending,
        };

        Ok(Self {
            site_url,
            server_relative_url,
            pages_list: lookup("SHAREPOINT_PAGES_LIST").unwrap_or(DEFAULT_PAGES_LIST.to_string()),
            term_group_id: lookup("TERM_GROUP_ID").unwrap_or_default(),
            term_set_names,
            term_tree_max_depth,
            sort_on_column_change,
        })
    }

    /// Folder holding the pages of one category.
    pub fn folder_path_for_category(&self, category: &str) -> String {
        format!("{}/SitePages/{}", self.server_relative_url, category)
    }
}

/// Column and field names of the pages list.
///
/// Column identifiers (`category_column`, `date_column`) are what filters
/// refer to; the `*_field` members are the internal names the list service
/// understands.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSchema {
    pub folder_field: String,
    pub object_type_field: String,
    pub title_field: String,
    pub article_id_field: String,
    pub modified_field: String,
    pub tag_term_field: String,
    pub tag_expand_field: String,
    pub category_column: String,
    pub date_column: String,
    pub select_fields: Vec<String>,
}

impl Default for ListSchema {
    fn default() -> Self {
        Self {
            folder_field: "FileDirRef".to_string(),
            object_type_field: "FSObjType".to_string(),
            title_field: "Title".to_string(),
            article_id_field: "Article_x0020_ID".to_string(),
            modified_field: "Modified".to_string(),
            tag_term_field: "TaxCatchAll/Term".to_string(),
            tag_expand_field: "TaxCatchAll".to_string(),
            category_column: CATEGORY_COLUMN.to_string(),
            date_column: DATE_COLUMN.to_string(),
            select_fields: [
                "Title",
                "Description",
                "FileLeafRef",
                "FileRef",
                "Modified",
                "Id",
                "TaxCatchAll/Term",
                "Article_x0020_ID",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
