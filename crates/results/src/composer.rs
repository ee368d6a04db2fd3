//! Flattens an engine result into one ranked list.
//!
//! The flattened list feeds both the rendered result panels and the detail
//! selector, so a rank always means the same movie in both places.
//!
//! ## Algorithm
//! 1. Single-track: the first `top_n` recommendations, ranked `1..=k`
//! 2. Dual-track: the first `top_n` of the entity track ranked `1..=k1`,
//!    then the first `top_n` of the mood track ranked from `k1 + 1`
//!
//! Tracks are never merged or re-sorted by score. Rank is presentation
//! order, entity track first.

use engine_client::{MovieRecommendation, RecommendationResult};
use serde::Serialize;
use tracing::debug;

/// Which list a ranked movie came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Track {
    Single,
    Entity,
    Mood,
}

impl Track {
    pub fn heading(&self) -> &'static str {
        match self {
            Track::Single => "Recommendations",
            Track::Entity => "Entity Track",
            Track::Mood => "Mood Track",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Track::Single => "",
            Track::Entity => "Content-focused (actors, themes, genres)",
            Track::Mood => "Theme/sentiment-focused",
        }
    }
}

/// One row of the flattened list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie {
    /// 1-based, contiguous across tracks
    pub rank: usize,
    pub title: String,
    pub record: MovieRecommendation,
    pub track: Track,
}

impl RankedMovie {
    /// Label used by the detail selector, e.g. `"5. Heat"`
    pub fn selection_label(&self) -> String {
        format!("{}. {}", self.rank, self.title)
    }
}

/// Flatten `result` into a rank-ordered list, at most `top_n` per track
pub fn flatten(result: &RecommendationResult, top_n: usize) -> Vec<RankedMovie> {
    let ranked = match result {
        RecommendationResult::SingleTrack {
            recommendations, ..
        } => rank_track(recommendations, top_n, 1, Track::Single),
        RecommendationResult::DualTrack {
            entity_track,
            mood_track,
            ..
        } => {
            let mut ranked = rank_track(entity_track, top_n, 1, Track::Entity);
            let next_rank = ranked.len() + 1;
            ranked.extend(rank_track(mood_track, top_n, next_rank, Track::Mood));
            ranked
        }
    };

    debug!(
        "Flattened {} result into {} ranked movies (top_n={})",
        if result.is_dual_track() { "dual-track" } else { "single-track" },
        ranked.len(),
        top_n
    );
    ranked
}

fn rank_track(
    movies: &[MovieRecommendation],
    top_n: usize,
    first_rank: usize,
    track: Track,
) -> Vec<RankedMovie> {
    movies
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(offset, movie)| RankedMovie {
            rank: first_rank + offset,
            title: movie.movie_title.clone(),
            record: movie.clone(),
            track,
        })
        .collect()
}

/// Recover the title from a selector label.
///
/// Splits at the first `". "`, so titles that themselves contain `". "`
/// survive intact. Labels without a rank prefix are returned unchanged.
pub fn title_from_selection(label: &str) -> &str {
    label
        .split_once(". ")
        .map(|(_, title)| title)
        .unwrap_or(label)
}
