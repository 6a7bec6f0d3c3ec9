//! GET-only OData client for one SharePoint site.

use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

const ACCEPT_NOMETADATA: &str = "application/json;odata=nometadata";

/// One page of an OData collection response.
#[derive(Debug, Deserialize)]
pub struct ODataCollection<T> {
    pub value: Vec<T>,
    #[serde(rename = "odata.nextLink", alias = "@odata.nextLink", default)]
    pub next_link: Option<String>,
}

/// Thin GET-only JSON client bound to one site.
#[derive(Debug, Clone)]
pub struct SharePointRestClient {
    http: reqwest::Client,
    site_url: String,
}

impl SharePointRestClient {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), site_url)
    }

    pub fn with_http_client(http: reqwest::Client, site_url: impl Into<String>) -> Self {
        let site_url = site_url.into().trim_end_matches('/').to_string();
        Self { http, site_url }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Absolute url for a site-relative api path such as `/_api/web`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> anyhow::Result<T> {
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_NOMETADATA)
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let response_txt = response.text().await.unwrap_or_default();
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        let response: T = response.json().await?;
        let dt_ms = t0.elapsed().as_millis() as u32;
        debug!(url, %status, dt_ms, "sharepoint response");
        Ok(response)
    }

    /// Every element of a collection, following `nextLink` continuations
    /// until the service stops sending one.
    pub async fn get_all_values<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> anyhow::Result<Vec<T>> {
        let mut page: ODataCollection<T> = self.get_json(url, query).await?;
        let mut values = std::mem::take(&mut page.value);
        while let Some(next_link) = page.next_link.take() {
            debug!(next_link = %next_link, "following continuation");
            page = self.get_json(&next_link, &[]).await?;
            values.append(&mut page.value);
        }
        Ok(values)
    }
}
