//! Catalog data - channels, streams, logos and countries.
//!
//! A [`CatalogSource`] yields an immutable [`CatalogSnapshot`] for each
//! request. The bundled source reads the dataset from disk once and hands out
//! the same shared snapshot; the remote source fetches a fresh copy every time.

mod bundled;
mod remote;
mod types;

pub use bundled::BundledCatalog;
pub use remote::RemoteCatalog;
pub use types::*;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{DatasetConfig, DatasetSourceKind};

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Bundled file could not be read.
    #[error("Failed to read {dataset} from {path}: {source}")]
    Io {
        dataset: Dataset,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request to the static host failed.
    #[error("Failed to fetch {dataset}: {source}")]
    Fetch {
        dataset: Dataset,
        #[source]
        source: reqwest::Error,
    },

    /// Static host answered with a non-success status.
    #[error("Fetching {dataset} returned HTTP {status}")]
    Status { dataset: Dataset, status: u16 },

    /// Document was not valid JSON for its collection.
    #[error("Failed to decode {dataset}: {message}")]
    Decode { dataset: Dataset, message: String },

    /// Client could not be built from config.
    #[error("Catalog source not configured: {0}")]
    NotConfigured(String),
}

impl CatalogError {
    /// Whether the failure came from the remote static host.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CatalogError::Fetch { .. } | CatalogError::Status { .. } | CatalogError::Decode { .. }
        )
    }
}

/// Trait for catalog data sources.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Produce all four collections, or fail as a whole.
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError>;

    /// Name of the loading mode, for logs and metrics.
    fn mode_name(&self) -> &'static str;
}

/// Factory function to create a catalog source from config.
///
/// For the bundled mode this reads the whole dataset from disk, so startup
/// fails early on a missing or malformed bundle.
pub fn create_catalog_source(
    config: &DatasetConfig,
) -> Result<Box<dyn CatalogSource>, CatalogError> {
    match config.source {
        DatasetSourceKind::Bundled => Ok(Box::new(BundledCatalog::load(&config.bundled.dir)?)),
        DatasetSourceKind::Remote => Ok(Box::new(RemoteCatalog::new(config.remote.clone())?)),
    }
}

/// Parse one collection from its JSON document.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    dataset: Dataset,
    bytes: &[u8],
) -> Result<Vec<T>, CatalogError> {
    serde_json::from_slice(bytes).map_err(|e| CatalogError::Decode {
        dataset,
        message: e.to_string(),
    })
}
