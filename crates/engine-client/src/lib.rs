//! Client side of the recommendation engine boundary.
//!
//! This crate provides:
//! - The result model (`RecommendationResult` and friends) every layer above
//!   the engine works with
//! - The `Recommender` trait describing the engine contract
//! - `GrpcRecommender`, which reaches the ranking service over gRPC
//!
//! ## Example Usage
//! ```ignore
//! use engine_client::{GrpcRecommender, PreferenceMode, Recommender};
//!
//! let engine = GrpcRecommender::connect("http://localhost:50051", catalog).await?;
//! let result = engine.recommend("90s action movies", PreferenceMode::Balanced, 10).await?;
//! ```

pub mod error;
pub mod grpc;
pub mod proto;
pub mod recommender;
pub mod types;

pub use error::{EngineError, ParseModeError, Result};
pub use grpc::GrpcRecommender;
pub use recommender::Recommender;
pub use types::{MovieRecommendation, PreferenceMode, QueryInterpretation, RecommendationResult};
