//! Dataset fetched from a remote static JSON host.
//!
//! Every call to [`CatalogSource::snapshot`] downloads all four documents.
//! There is no caching and no retry: any failed document fails the snapshot.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{decode, CatalogError, CatalogSnapshot, CatalogSource, Dataset};
use crate::config::RemoteConfig;

/// Client for the static IPTV API.
pub struct RemoteCatalog {
    client: Client,
    base_url: String,
    parallel: bool,
}

impl RemoteCatalog {
    /// Create a new remote catalog client.
    pub fn new(config: RemoteConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()
            .map_err(|e| CatalogError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            parallel: config.parallel,
        })
    }

    fn url_for(&self, dataset: Dataset) -> String {
        format!("{}/{}", self.base_url, dataset.file_name())
    }

    async fn fetch<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>, CatalogError> {
        let url = self.url_for(dataset);
        debug!("Fetching {} from {}", dataset, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Fetch { dataset, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                dataset,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Fetch { dataset, source })?;

        let rows = decode(dataset, &body)?;
        debug!("Fetched {} ({} bytes)", dataset, body.len());
        Ok(rows)
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let snapshot = if self.parallel {
            let (channels, streams, logos, countries) = tokio::try_join!(
                self.fetch(Dataset::Channels),
                self.fetch(Dataset::Streams),
                self.fetch(Dataset::Logos),
                self.fetch(Dataset::Countries),
            )?;
            CatalogSnapshot {
                channels,
                streams,
                logos,
                countries,
            }
        } else {
            CatalogSnapshot {
                channels: self.fetch(Dataset::Channels).await?,
                streams: self.fetch(Dataset::Streams).await?,
                logos: self.fetch(Dataset::Logos).await?,
                countries: self.fetch(Dataset::Countries).await?,
            }
        };

        Ok(Arc::new(snapshot))
    }

    fn mode_name(&self) -> &'static str {
        "remote"
    }
}
