//! Process-wide engine handle.
//!
//! Building a recommender is expensive (catalog load plus a connection), so
//! it happens at most once per process. Concurrent first callers wait on the
//! same initialisation; a failed attempt leaves the cache empty so the next
//! caller retries.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use engine_client::{GrpcRecommender, Recommender};
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Default)]
pub struct EngineCache {
    inner: OnceCell<Arc<dyn Recommender>>,
}

impl EngineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared engine, building it with `init` on first use
    pub async fn get_or_init<F, Fut>(&self, init: F) -> Result<Arc<dyn Recommender>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<dyn Recommender>>>,
    {
        let engine = self.inner.get_or_try_init(init).await?;
        Ok(Arc::clone(engine))
    }

    pub fn get(&self) -> Option<Arc<dyn Recommender>> {
        self.inner.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized()
    }
}

/// Load the catalog and connect to the gRPC engine
pub async fn connect_grpc(addr: &str, catalog_path: &Path) -> Result<Arc<dyn Recommender>> {
    let catalog = catalog::MovieCatalog::load_from_file(catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;
    info!("Catalog ready with {} movies", catalog.len());

    let engine = GrpcRecommender::connect(addr, Arc::new(catalog))
        .await
        .with_context(|| format!("Failed to reach recommendation engine at {addr}"))?;
    Ok(Arc::new(engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubRecommender;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_engine_is_built_once() {
        let cache = EngineCache::new();
        let builds = AtomicUsize::new(0);

        for _ in 0..3 {
            let engine = cache
                .get_or_init(|| async {
                    builds.fetch_add(1, Ordering::SeqCst);
                    Ok(Arc::new(StubRecommender::default()) as Arc<dyn Recommender>)
                })
                .await
                .unwrap();
            assert_eq!(engine.name(), "stub");
        }

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(cache.is_initialized());
    }

    #[tokio::test]
    async fn test_failed_init_is_retried() {
        let cache = EngineCache::new();

        let first = cache
            .get_or_init(|| async { Err(anyhow::anyhow!("engine offline")) })
            .await;
        assert!(first.is_err());
        assert!(cache.get().is_none());

        let second = cache
            .get_or_init(|| async {
                Ok(Arc::new(StubRecommender::default()) as Arc<dyn Recommender>)
            })
            .await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_missing_catalog_fails() {
        let result =
            connect_grpc("http://127.0.0.1:1", Path::new("/nonexistent/movies.jsonl")).await;
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Failed to load catalog"));
    }
}
