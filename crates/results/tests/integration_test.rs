//! Integration tests for composition and resolution.
//!
//! These drive a realistic search result through flattening, the detail
//! selector, and catalog resolution.

use catalog::{CatalogRow, FieldValue, MovieCatalog, columns};
use engine_client::{MovieRecommendation, QueryInterpretation, RecommendationResult};
use results::{DetailValue, DetailView, RowView, flatten, resolve, title_from_selection};

const ARNOLD_90S: [(&str, i32); 10] = [
    ("Terminator 2: Judgment Day", 1991),
    ("True Lies", 1994),
    ("Total Recall", 1990),
    ("Eraser", 1996),
    ("Last Action Hero", 1993),
    ("Kindergarten Cop", 1990),
    ("Junior", 1994),
    ("Jingle All the Way", 1996),
    ("Batman & Robin", 1997),
    ("End of Days", 1999),
];

fn create_test_setup() -> (MovieCatalog, RecommendationResult) {
    let mut catalog = MovieCatalog::new();
    for (title, year) in ARNOLD_90S {
        catalog.insert_row(
            CatalogRow::new()
                .with(columns::TITLE, title)
                .with(columns::YEAR, year as f64)
                .with(columns::CAST, vec!["Arnold Schwarzenegger"])
                .with(columns::GENRES, vec!["Action"])
                .with(columns::RUNTIME, 110.0)
                .with(columns::VOTE_AVERAGE, 6.5),
        );
    }
    // A sparse row with the same title as a real one, later in the file
    catalog.insert_row(
        CatalogRow::new()
            .with(columns::TITLE, "Eraser")
            .with(columns::RUNTIME, FieldValue::Null),
    );

    let recommendations = ARNOLD_90S
        .iter()
        .enumerate()
        .map(|(i, (title, year))| {
            MovieRecommendation::new(*title, 0.95 - i as f64 * 0.05).with_year(*year)
        })
        .collect();
    let parsed_query = QueryInterpretation {
        genres: vec!["Action".into()],
        decades: vec!["1990s".into()],
        actors: vec!["Arnold Schwarzenegger".into()],
        moods: vec![],
    };

    (catalog, RecommendationResult::single_track(recommendations, Some(parsed_query)))
}

#[test]
fn test_search_then_select_rank_five() {
    let (catalog, result) = create_test_setup();

    let ranked = flatten(&result, 10);
    assert_eq!(ranked.len(), 10);
    assert_eq!(
        ranked.iter().map(|m| m.rank).collect::<Vec<_>>(),
        (1..=10).collect::<Vec<_>>()
    );

    // The selector offers the same ranks the panel shows
    let labels: Vec<String> = ranked.iter().map(|m| m.selection_label()).collect();
    let rows: Vec<RowView> = ranked.iter().map(RowView::from_ranked).collect();
    for (label, row) in labels.iter().zip(&rows) {
        assert!(label.starts_with(&format!("{}. ", row.rank)));
    }

    let selected = title_from_selection(&labels[4]);
    assert_eq!(selected, "Last Action Hero");

    let details = resolve(&catalog, selected).expect("rank 5 should resolve");
    assert_eq!(details.title, "Last Action Hero");
    assert_eq!(details.year, DetailValue::Value("1993".into()));
    assert_eq!(details.cast, vec!["Arnold Schwarzenegger".to_string()]);

    let view = DetailView::from_record(&details);
    assert_eq!(view.header, "Last Action Hero (1993)");
}

#[test]
fn test_duplicate_titles_resolve_to_first_catalog_row() {
    let (catalog, _) = create_test_setup();

    let details = resolve(&catalog, "Eraser").unwrap();
    assert_eq!(details.runtime, DetailValue::Value("110".into()));
    assert_eq!(details.year.to_string(), "1996");
}

#[test]
fn test_dual_track_ranks_match_selector() {
    let entity: Vec<_> = ARNOLD_90S[..4]
        .iter()
        .map(|(t, _)| MovieRecommendation::new(*t, 0.5))
        .collect();
    let mood: Vec<_> = ARNOLD_90S[4..]
        .iter()
        .map(|(t, _)| MovieRecommendation::new(*t, 0.9))
        .collect();
    let result = RecommendationResult::classify(vec![], entity, mood, true, None);

    let ranked = flatten(&result, 5);
    assert_eq!(ranked.len(), 9);
    assert_eq!(ranked[4].rank, 5);
    assert_eq!(ranked[4].title, "Last Action Hero");
    assert_eq!(title_from_selection(&ranked[4].selection_label()), "Last Action Hero");
}
