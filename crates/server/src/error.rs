//! Query-level failures.

use engine_client::EngineError;
use session::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("top_n {value} is outside {min}..={max}")]
    TopNOutOfRange { value: usize, min: usize, max: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl QueryError {
    /// Split into a short user-facing line and a diagnostic detail
    pub fn to_search_error(&self) -> SearchError {
        SearchError {
            message: format!("Error: {self}"),
            detail: format!("{self:?}"),
        }
    }
}
