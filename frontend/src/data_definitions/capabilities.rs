//! Feature flags for the pages list.

use anyhow::bail;
use serde::{Deserialize, Serialize};


/// What a category selection carries into the pages list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPayload {
    /// Only the category name scopes the list; secondary values are ignored.
    NameOnly,
    /// Secondary values become a filter on the category column.
    #[default]
    WithSecondaryFilter,
}

impl std::str::FromStr for CategoryPayload {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name_only" | "name" => Ok(CategoryPayload::NameOnly),
            "with_secondary_filter" | "secondary" => Ok(CategoryPayload::WithSecondaryFilter),
            other => bail!("unknown category payload: {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCapabilities {
    pub filter_panel: bool,
    pub category_payload: CategoryPayload,
}

impl Default for ListCapabilities {
    fn default() -> Self {
        Self { filter_panel: true, category_payload: CategoryPayload::default() }
    }
}

impl ListCapabilities {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `KB_FILTER_PANEL` (true/false/1/0) and `KB_CATEGORY_PAYLOAD`
    /// (name_only/with_secondary_filter); missing keys keep the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut capabilities = Self::default();
        if let Some(flag) = lookup("KB_FILTER_PANEL") {
            capabilities.filter_panel = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => true,
                "0" | "false" | "off" | "no" => false,
                other => bail!("KB_FILTER_PANEL must be true or false, got {}", other),
            };
        }
        if let Some(payload) = lookup("KB_CATEGORY_PAYLOAD") {
            capabilities.category_payload = payload.parse()?;
        }
        Ok(capabilities)
    }
}
