//! Presentation helpers shared by every front end.
//!
//! These turn ranked movies and detail records into plain strings. Nothing
//! here knows about terminals or markup.

use std::borrow::Cow;

use crate::composer::RankedMovie;
use crate::details::{DetailValue, MovieDetailRecord};

/// Overview budget in the full detail view
pub const DETAIL_OVERVIEW_LIMIT: usize = 600;
/// Overview budget in a compact result row
pub const ROW_OVERVIEW_LIMIT: usize = 150;

const CONTINUATION: &str = "...";
const MAX_DIRECTORS: usize = 3;
const MAX_CAST: usize = 6;
const MAX_STUDIOS: usize = 3;

/// Cut `text` to `limit` characters, marking the cut with `...`
pub fn truncate_overview(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => Cow::Owned(format!("{}{}", &text[..byte_idx], CONTINUATION)),
        None => Cow::Borrowed(text),
    }
}

/// One compact result row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub rank: usize,
    pub heading: String,
    pub caption: Option<String>,
    pub score: String,
}

impl RowView {
    pub fn from_ranked(movie: &RankedMovie) -> Self {
        let year = movie
            .record
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| crate::details::NOT_AVAILABLE.to_string());
        let caption = movie
            .record
            .overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .map(|o| truncate_overview(o, ROW_OVERVIEW_LIMIT).into_owned());

        Self {
            rank: movie.rank,
            heading: format!("{} ({})", movie.title, year),
            caption,
            score: format!("{:.2}", movie.record.final_score),
        }
    }
}

/// The full detail panel
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub header: String,
    /// Label/value pairs, already filtered to what is worth showing
    pub facts: Vec<(&'static str, String)>,
    pub overview: String,
}

impl DetailView {
    pub fn from_record(record: &MovieDetailRecord) -> Self {
        let mut facts = Vec::new();

        push_list(&mut facts, "Director(s)", &record.directors, Some(MAX_DIRECTORS));
        push_list(&mut facts, "Cast", &record.cast, Some(MAX_CAST));
        push_list(&mut facts, "Studio", &record.production_companies, Some(MAX_STUDIOS));
        push_list(&mut facts, "Genres", &record.genres, None);

        if let DetailValue::Value(runtime) = &record.runtime {
            facts.push(("Runtime", format!("{runtime} min")));
        }
        if let DetailValue::Value(rating) = &record.vote_average {
            facts.push(("TMDB Rating", format!("{rating}/10")));
        }

        Self {
            header: format!("{} ({})", record.title, record.year),
            facts,
            overview: truncate_overview(&record.overview, DETAIL_OVERVIEW_LIMIT).into_owned(),
        }
    }
}

fn push_list(
    facts: &mut Vec<(&'static str, String)>,
    label: &'static str,
    items: &[String],
    limit: Option<usize>,
) {
    if items.is_empty() {
        return;
    }
    let shown = &items[..limit.unwrap_or(items.len()).min(items.len())];
    facts.push((label, shown.join(", ")));
}
