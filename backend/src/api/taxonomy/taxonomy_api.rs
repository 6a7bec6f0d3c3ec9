//! Taxonomy read API: wire records and the term store REST client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::sp_utils::{odata::quote, rest_client::SharePointRestClient};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermGroupRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    #[serde(rename = "languageTag", default)]
    pub language_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSetRecord {
    pub id: String,
    #[serde(rename = "localizedNames", default)]
    pub localized_names: Vec<LocalizedName>,
}

impl TermSetRecord {
    pub fn first_name(&self) -> Option<&str> {
        self.localized_names.first().map(|n| n.name.as_str())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.localized_names.iter().any(|n| n.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermLabel {
    pub name: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: Option<bool>,
    #[serde(rename = "languageTag", default)]
    pub language_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<TermLabel>,
    #[serde(rename = "childrenCount", default)]
    pub children_count: u64,
}

impl TermRecord {
    /// First label, empty when the term has none.
    pub fn display_name(&self) -> String {
        self.labels.first().map(|l| l.name.clone()).unwrap_or_default()
    }
}

/// Read-only view of a term store.
#[async_trait]
pub trait TaxonomyApi: Send + Sync {
    async fn list_groups(&self) -> anyhow::Result<Vec<TermGroupRecord>>;

    async fn list_term_sets(&self, group_id: &str) -> anyhow::Result<Vec<TermSetRecord>>;

    /// Term sets of `group_id` having `set_name` among their localized names.
    async fn find_term_sets_by_name(
        &self,
        group_id: &str,
        set_name: &str,
    ) -> anyhow::Result<Vec<TermSetRecord>>;

    /// Immediate children of a term, or the root terms of the set when
    /// `parent_term_id` is `None`.
    async fn list_children(
        &self,
        set_id: &str,
        parent_term_id: Option<&str>,
    ) -> anyhow::Result<Vec<TermRecord>>;
}

/// Term store client for the `/_api/v2.1/termStore` endpoints.
#[derive(Debug, Clone)]
pub struct SharePointTaxonomyApi {
    client: SharePointRestClient,
}

impl SharePointTaxonomyApi {
    pub fn new(client: SharePointRestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaxonomyApi for SharePointTaxonomyApi {
    async fn list_groups(&self) -> anyhow::Result<Vec<TermGroupRecord>> {
        let url = self.client.api_url("/_api/v2.1/termstore/groups");
        self.client.get_all_values(&url, &[]).await
    }

    async fn list_term_sets(&self, group_id: &str) -> anyhow::Result<Vec<TermSetRecord>> {
        let url = self.client.api_url(&format!("/_api/v2.1/termstore/groups/{group_id}/sets"));
        self.client.get_all_values(&url, &[]).await
    }

    async fn find_term_sets_by_name(
        &self,
        group_id: &str,
        set_name: &str,
    ) -> anyhow::Result<Vec<TermSetRecord>> {
        let url = self.client.api_url(&format!("/_api/v2.1/termStore/termgroups('{group_id}')/termsets"));
        let query = [
            ("$filter", format!("localizedNames/any(n:n/name eq {})", quote(set_name))),
            ("$select", "id,localizedNames".to_string()),
        ];
        self.client.get_all_values(&url, &query).await
    }

    async fn list_children(
        &self,
        set_id: &str,
        parent_term_id: Option<&str>,
    ) -> anyhow::Result<Vec<TermRecord>> {
        let path = match parent_term_id {
            Some(term_id) => format!("/_api/v2.1/termStore/termSets('{set_id}')/terms('{term_id}')/getlegacychildren"),
            None => format!("/_api/v2.1/termStore/termSets('{set_id}')/getlegacychildren"),
        };
        let url = self.client.api_url(&path);
        self.client.get_all_values(&url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_record_from_wire() {
        let record: TermRecord = serde_json::from_value(json!({
            "id": "7f2c",
            "labels": [{"name": "Hiring", "isDefault": true, "languageTag": "en-US"}],
            "childrenCount": 2
        }))
        .unwrap();
        assert_eq!(record.display_name(), "Hiring");
        assert_eq!(record.children_count, 2);

        let unlabeled: TermRecord = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert_eq!(unlabeled.display_name(), "");
        assert_eq!(unlabeled.children_count, 0);
    }

    #[test]
    fn test_term_set_names() {
        let record: TermSetRecord = serde_json::from_value(json!({
            "id": "s1",
            "localizedNames": [{"name": "Departments", "languageTag": "en-US"}, {"name": "Abteilungen", "languageTag": "de-DE"}]
        }))
        .unwrap();
        assert_eq!(record.first_name(), Some("Departments"));
        assert!(record.has_name("Abteilungen"));
        assert!(!record.has_name("departments"));
    }
}
