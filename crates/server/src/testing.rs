//! In-process recommender and log capture used by the unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog::MovieCatalog;
use engine_client::{
    EngineError, MovieRecommendation, PreferenceMode, RecommendationResult, Recommender,
};

type Call = (String, PreferenceMode, usize);

#[derive(Default)]
pub struct StubRecommender {
    result: Option<RecommendationResult>,
    failure: Option<String>,
    catalog: MovieCatalog,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl StubRecommender {
    pub fn returning(movies: Vec<MovieRecommendation>) -> Self {
        Self::with_result(RecommendationResult::single_track(movies, None))
    }

    pub fn with_result(result: RecommendationResult) -> Self {
        Self {
            result: Some(result),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_catalog(mut self, catalog: MovieCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

#[async_trait]
impl Recommender for StubRecommender {
    fn name(&self) -> &str {
        "stub"
    }

    async fn recommend(
        &self,
        query: &str,
        mode: PreferenceMode,
        top_n: usize,
    ) -> engine_client::Result<RecommendationResult> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), mode, top_n));

        if let Some(message) = &self.failure {
            return Err(EngineError::RequestFailed(message.clone()));
        }
        Ok(self
            .result
            .clone()
            .unwrap_or_else(|| RecommendationResult::single_track(vec![], None)))
    }

    fn movies(&self) -> &MovieCatalog {
        &self.catalog
    }
}

/// `io::Write` sink shared with a fmt subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Debug-level subscriber writing into this buffer, installed for the current thread
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
