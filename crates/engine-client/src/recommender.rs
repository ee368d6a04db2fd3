//! The engine contract consumed by the orchestration layer.

use async_trait::async_trait;
use catalog::MovieCatalog;

use crate::error::Result;
use crate::types::{PreferenceMode, RecommendationResult};

/// An external recommendation engine.
///
/// Implementations are expensive to construct and are built once per process,
/// then shared read-only (`Arc<dyn Recommender>`) across every query. They
/// must tolerate repeated sequential calls without reinitialisation.
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &str;

    /// Rank movies for a free-text query.
    ///
    /// `top_n` is the number of results wanted per track. Any failure is
    /// reported as an error; callers decide how to surface it.
    async fn recommend(
        &self,
        query: &str,
        mode: PreferenceMode,
        top_n: usize,
    ) -> Result<RecommendationResult>;

    /// Metadata catalog backing detail lookups
    fn movies(&self) -> &MovieCatalog;
}
