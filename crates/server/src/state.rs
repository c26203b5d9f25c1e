use std::sync::Arc;

use iptv_catalog_core::{CatalogError, CatalogSnapshot, CatalogSource, Config, SanitizedConfig};
use tracing::debug;

use crate::metrics::DATASET_LOADS_TOTAL;

/// Shared application state
pub struct AppState {
    config: Config,
    source: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn CatalogSource>) -> Self {
        Self { config, source }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn source(&self) -> &dyn CatalogSource {
        self.source.as_ref()
    }

    /// Load the snapshot for one request, recording the outcome.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let mode = self.source.mode_name();
        let result = self.source.snapshot().await;
        let outcome = if result.is_ok() { "ok" } else { "error" };
        DATASET_LOADS_TOTAL.with_label_values(&[mode, outcome]).inc();
        debug!("Catalog snapshot from {} source: {}", mode, outcome);
        result
    }
}
