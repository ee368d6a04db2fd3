//! Wire messages for the `kineto.Recommender` gRPC service.
//!
//! These mirror `proto/kineto.proto` field for field and tag for tag.

use tracing::warn;

use crate::types::{MovieRecommendation, QueryInterpretation, RecommendationResult};

/// Fully-qualified method path of the unary `Recommend` call
pub const RECOMMEND_PATH: &str = "/kineto.Recommender/Recommend";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecommendRequest {
    #[prost(string, tag = "1")]
    pub query: String,
    #[prost(string, tag = "2")]
    pub preference_mode: String,
    #[prost(uint32, tag = "3")]
    pub top_n: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScoredMovie {
    #[prost(string, tag = "1")]
    pub movie_title: String,
    #[prost(double, tag = "2")]
    pub final_score: f64,
    #[prost(int32, optional, tag = "3")]
    pub year: Option<i32>,
    #[prost(string, optional, tag = "4")]
    pub overview: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParsedQuery {
    #[prost(string, repeated, tag = "1")]
    pub genres: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub decades: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub actors: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub moods: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecommendResponse {
    #[prost(message, repeated, tag = "1")]
    pub recommendations: Vec<ScoredMovie>,
    #[prost(message, repeated, tag = "2")]
    pub entity_track: Vec<ScoredMovie>,
    #[prost(message, repeated, tag = "3")]
    pub mood_track: Vec<ScoredMovie>,
    #[prost(bool, tag = "4")]
    pub dual_track_mode: bool,
    #[prost(message, optional, tag = "5")]
    pub parsed_query: Option<ParsedQuery>,
}

impl From<ScoredMovie> for MovieRecommendation {
    fn from(movie: ScoredMovie) -> Self {
        MovieRecommendation {
            movie_title: movie.movie_title,
            final_score: movie.final_score,
            year: movie.year,
            overview: movie.overview,
        }
    }
}

impl From<ParsedQuery> for QueryInterpretation {
    fn from(pq: ParsedQuery) -> Self {
        QueryInterpretation {
            genres: pq.genres,
            decades: pq.decades,
            actors: pq.actors,
            moods: pq.moods,
        }
    }
}

impl From<RecommendResponse> for RecommendationResult {
    fn from(response: RecommendResponse) -> Self {
        RecommendationResult::classify(
            convert_track("recommendations", response.recommendations),
            convert_track("entity_track", response.entity_track),
            convert_track("mood_track", response.mood_track),
            response.dual_track_mode,
            response.parsed_query.map(QueryInterpretation::from),
        )
    }
}

/// Entries without a title cannot be shown or resolved; they are dropped.
fn convert_track(track: &str, movies: Vec<ScoredMovie>) -> Vec<MovieRecommendation> {
    let total = movies.len();
    let kept: Vec<MovieRecommendation> = movies
        .into_iter()
        .filter(|movie| !movie.movie_title.trim().is_empty())
        .map(MovieRecommendation::from)
        .collect();
    if kept.len() < total {
        warn!("Dropped {} untitled entries from {}", total - kept.len(), track);
    }
    kept
}
