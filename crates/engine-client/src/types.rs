//! Recommendation result model shared by every layer above the engine.
//!
//! The engine answers either with one ranked list or with two parallel
//! tracks (entity-focused and mood-focused). Which shape applies is decided
//! once, when the engine response is converted, and carried as an enum tag
//! from then on.

use crate::error::ParseModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Preference Mode
// =============================================================================

/// Coarse ranking hint forwarded to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceMode {
    /// Mix of relevance and quality
    #[default]
    Balanced,
    /// Pure content matching, ignores ratings
    Accuracy,
    /// Prioritises highly-rated, popular movies
    Ratings,
}

impl PreferenceMode {
    /// Wire name sent to the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceMode::Balanced => "balanced",
            PreferenceMode::Accuracy => "accuracy",
            PreferenceMode::Ratings => "ratings",
        }
    }

    /// One-line explanation shown next to the setting
    pub fn description(&self) -> &'static str {
        match self {
            PreferenceMode::Balanced => "Mix of relevance and quality (recommended)",
            PreferenceMode::Accuracy => "Pure content matching, ignores ratings",
            PreferenceMode::Ratings => "Prioritizes highly-rated/popular movies",
        }
    }
}

impl fmt::Display for PreferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Ok(PreferenceMode::Balanced),
            "accuracy" => Ok(PreferenceMode::Accuracy),
            "ratings" => Ok(PreferenceMode::Ratings),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

// =============================================================================
// Movies and Query Interpretation
// =============================================================================

/// One scored movie as returned by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecommendation {
    pub movie_title: String,
    pub final_score: f64,
    pub year: Option<i32>,
    pub overview: Option<String>,
}

impl MovieRecommendation {
    pub fn new(movie_title: impl Into<String>, final_score: f64) -> Self {
        Self {
            movie_title: movie_title.into(),
            final_score,
            year: None,
            overview: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }
}

/// How the engine understood the free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInterpretation {
    pub genres: Vec<String>,
    pub decades: Vec<String>,
    pub actors: Vec<String>,
    pub moods: Vec<String>,
}

impl QueryInterpretation {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.decades.is_empty()
            && self.actors.is_empty()
            && self.moods.is_empty()
    }
}

// =============================================================================
// Recommendation Result
// =============================================================================

/// Engine output, tagged by shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RecommendationResult {
    SingleTrack {
        recommendations: Vec<MovieRecommendation>,
        parsed_query: Option<QueryInterpretation>,
    },
    DualTrack {
        entity_track: Vec<MovieRecommendation>,
        mood_track: Vec<MovieRecommendation>,
        parsed_query: Option<QueryInterpretation>,
    },
}

impl RecommendationResult {
    pub fn single_track(
        recommendations: Vec<MovieRecommendation>,
        parsed_query: Option<QueryInterpretation>,
    ) -> Self {
        RecommendationResult::SingleTrack {
            recommendations,
            parsed_query,
        }
    }

    /// Decide the result shape from an engine response.
    ///
    /// Dual-track applies only when the engine flagged it and both tracks
    /// have entries. Anything else is single-track over `recommendations`,
    /// including a flagged response with one empty track.
    pub fn classify(
        recommendations: Vec<MovieRecommendation>,
        entity_track: Vec<MovieRecommendation>,
        mood_track: Vec<MovieRecommendation>,
        dual_track_mode: bool,
        parsed_query: Option<QueryInterpretation>,
    ) -> Self {
        if dual_track_mode && !entity_track.is_empty() && !mood_track.is_empty() {
            RecommendationResult::DualTrack {
                entity_track,
                mood_track,
                parsed_query,
            }
        } else {
            RecommendationResult::SingleTrack {
                recommendations,
                parsed_query,
            }
        }
    }

    pub fn is_dual_track(&self) -> bool {
        matches!(self, RecommendationResult::DualTrack { .. })
    }

    /// Interpretation, when the engine supplied a non-empty one
    pub fn parsed_query(&self) -> Option<&QueryInterpretation> {
        match self {
            RecommendationResult::SingleTrack { parsed_query, .. }
            | RecommendationResult::DualTrack { parsed_query, .. } => {
                parsed_query.as_ref().filter(|pq| !pq.is_empty())
            }
        }
    }

    /// True when there is nothing to show. A dual-track result never is.
    pub fn is_empty(&self) -> bool {
        match self {
            RecommendationResult::SingleTrack {
                recommendations, ..
            } => recommendations.is_empty(),
            RecommendationResult::DualTrack { .. } => false,
        }
    }
}
