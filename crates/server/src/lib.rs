//! Orchestration layer for Kineto.
//!
//! This crate wires the shared engine, the per-session state and the result
//! composer together:
//! - `orchestrator`: validates and runs one query, folding the outcome into
//!   the session
//! - `engine`: builds the recommender once per process
//! - `registry`: live sessions, each behind its own lock
//! - `app`: the action dispatcher and front-end-neutral page views

pub mod app;
pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod registry;

#[cfg(test)]
mod testing;

pub use app::{
    ActionError, DUAL_TRACK_NOTICE, DetailLookup, EXAMPLE_QUERIES, KinetoApp, NO_RESULTS, PageView,
    ResultSection, SearchStatus, SearchView, UserAction,
};
pub use engine::{EngineCache, connect_grpc};
pub use error::QueryError;
pub use orchestrator::{QueryOrchestrator, QueryOutcome};
pub use registry::{SessionHandle, SessionRegistry};
