//! Where the catalog snapshot comes from.

use std::path::PathBuf;

const DEFAULT_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `CATALOG_URL` wins over `CATALOG_PATH`; with neither set, the bundled
    /// catalog is used.
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("CATALOG_URL") {
            if !url.trim().is_empty() {
                return CatalogSource::Url(url);
            }
        }
        let path = std::env::var("CATALOG_PATH").unwrap_or(DEFAULT_CATALOG_PATH.to_string());
        CatalogSource::File(PathBuf::from(path))
    }

    pub async fn fetch_json(&self) -> anyhow::Result<String> {
        match self {
            CatalogSource::Url(url) => {
                let response = reqwest::Client::new().get(url).send().await?;
                let status = response.status();
                let response_txt = response.text().await?;
                if status.is_client_error() || status.is_server_error() {
                    anyhow::bail!("Error fetching catalog from {}: {}: {}", url, status, response_txt);
                }
                tracing::debug!("CATALOG RESPONSE: len = {}", response_txt.len());
                Ok(response_txt)
            }
            CatalogSource::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Cannot read catalog file {}: {}", path.display(), e))?;
                Ok(text)
            }
        }
    }
}
