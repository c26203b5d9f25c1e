//! Mock catalog source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CatalogSnapshot, CatalogSource};

/// Mock implementation of the CatalogSource trait.
///
/// Provides controllable behavior for testing:
/// - Serve a configurable snapshot
/// - Count snapshot requests
/// - Simulate upstream failures
#[derive(Debug)]
pub struct MockCatalogSource {
    snapshot: Arc<RwLock<Arc<CatalogSnapshot>>>,
    /// If set, the next snapshot call will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
    calls: AtomicUsize,
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::new(CatalogSnapshot::default())
    }
}

impl MockCatalogSource {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(snapshot))),
            next_error: Arc::new(RwLock::new(None)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the served snapshot.
    pub async fn set_snapshot(&self, snapshot: CatalogSnapshot) {
        *self.snapshot.write().await = Arc::new(snapshot);
    }

    /// Make the next snapshot call fail.
    pub async fn fail_next(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Number of snapshot calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        Ok(Arc::clone(&*self.snapshot.read().await))
    }

    fn mode_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dataset;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_fail_next_only_fails_once() {
        let source = MockCatalogSource::new(fixtures::sample_snapshot());
        source
            .fail_next(CatalogError::Status {
                dataset: Dataset::Streams,
                status: 503,
            })
            .await;

        assert!(source.snapshot().await.is_err());
        assert!(source.snapshot().await.is_ok());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_set_snapshot() {
        let source = MockCatalogSource::default();
        assert!(source.snapshot().await.unwrap().channels.is_empty());

        source.set_snapshot(fixtures::category_snapshot()).await;
        assert_eq!(source.snapshot().await.unwrap().channels.len(), 10);
    }
}
