//! # Query Orchestrator
//!
//! Runs one recommendation query end to end:
//! 1. Validate the query text and `top_n`
//! 2. Call the shared engine, timing the call
//! 3. On success, replace the session's results with the new answer
//! 4. On failure, record a displayable error and keep earlier results
//!
//! The session's page never changes here; a search always stays on the
//! search page whatever the outcome.

use std::sync::Arc;
use std::time::{Duration, Instant};

use engine_client::{PreferenceMode, RecommendationResult, Recommender};
use session::{MAX_TOP_N, MIN_TOP_N, SessionState};
use tracing::{error, info, warn};

use crate::error::QueryError;

/// Successful engine answer together with how long it took
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub result: RecommendationResult,
    pub elapsed: Duration,
}

#[derive(Clone)]
pub struct QueryOrchestrator {
    recommender: Arc<dyn Recommender>,
}

impl QueryOrchestrator {
    pub fn new(recommender: Arc<dyn Recommender>) -> Self {
        Self { recommender }
    }

    pub fn recommender(&self) -> &Arc<dyn Recommender> {
        &self.recommender
    }

    /// Validate and run `query` against the engine
    pub async fn run_query(
        &self,
        query: &str,
        mode: PreferenceMode,
        top_n: usize,
    ) -> Result<QueryOutcome, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        if !(MIN_TOP_N..=MAX_TOP_N).contains(&top_n) {
            return Err(QueryError::TopNOutOfRange {
                value: top_n,
                min: MIN_TOP_N,
                max: MAX_TOP_N,
            });
        }

        let start_time = Instant::now();
        let result = self.recommender.recommend(query, mode, top_n).await?;
        let elapsed = start_time.elapsed();

        info!(
            "{} answered {:?} ({}, top_n={}) in {:.2?}",
            self.recommender.name(),
            query,
            mode,
            top_n,
            elapsed
        );
        Ok(QueryOutcome { result, elapsed })
    }

    /// Run `query` and fold the outcome into `session`.
    ///
    /// Returns whether the search succeeded. Empty queries are ignored
    /// without touching the session.
    pub async fn search(
        &self,
        session: &mut SessionState,
        query: &str,
        mode: PreferenceMode,
        top_n: usize,
    ) -> bool {
        match self.run_query(query, mode, top_n).await {
            Ok(QueryOutcome { result, elapsed }) => {
                if result.is_empty() {
                    warn!("No movies found for {:?}", query);
                }
                session.record_search(query.trim(), result, elapsed, top_n);
                true
            }
            Err(QueryError::EmptyQuery) => false,
            Err(err) => {
                error!("Search for {:?} failed: {}", query, err);
                session.record_failure(err.to_search_error());
                false
            }
        }
    }
}
