//! Dataset bundled as JSON files on local disk.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{decode, CatalogError, CatalogSnapshot, CatalogSource, Dataset};

/// Catalog loaded once from a directory and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct BundledCatalog {
    snapshot: Arc<CatalogSnapshot>,
}

impl BundledCatalog {
    /// Read all four documents from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let read = |dataset: Dataset| -> Result<Vec<u8>, CatalogError> {
            let path = dir.join(dataset.file_name());
            debug!("Reading {} from {:?}", dataset, path);
            std::fs::read(&path).map_err(|source| CatalogError::Io {
                dataset,
                path: path.display().to_string(),
                source,
            })
        };

        let snapshot = CatalogSnapshot {
            channels: decode(Dataset::Channels, &read(Dataset::Channels)?)?,
            streams: decode(Dataset::Streams, &read(Dataset::Streams)?)?,
            logos: decode(Dataset::Logos, &read(Dataset::Logos)?)?,
            countries: decode(Dataset::Countries, &read(Dataset::Countries)?)?,
        };

        info!(
            "Loaded bundled catalog from {:?}: {} channels, {} streams, {} logos, {} countries",
            dir,
            snapshot.channels.len(),
            snapshot.streams.len(),
            snapshot.logos.len(),
            snapshot.countries.len()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Wrap an in-memory snapshot.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

#[async_trait]
impl CatalogSource for BundledCatalog {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        Ok(Arc::clone(&self.snapshot))
    }

    fn mode_name(&self) -> &'static str {
        "bundled"
    }
}
