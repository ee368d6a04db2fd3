//! Resolves a user-selected title to full catalog metadata.
//!
//! ## Matching
//! Case-insensitive throughout:
//! 1. A row whose title equals the input
//! 2. Otherwise, the first row whose title contains the input
//! 3. Otherwise, not found
//!
//! A miss is not an error; callers show a "could not find details" notice.

use catalog::{CatalogRow, MovieCatalog};
use tracing::{debug, instrument};

use crate::details::MovieDetailRecord;

/// Locate the catalog row for `title`, exact match first
pub fn find_row<'a>(catalog: &'a MovieCatalog, title: &str) -> Option<&'a CatalogRow> {
    let id = catalog
        .find_exact(title)
        .or_else(|| catalog.find_containing(title))?;
    catalog.get_row(id)
}

/// Resolve `title` to a fully-defaulted detail record
#[instrument(skip(catalog), fields(rows = catalog.len()))]
pub fn resolve(catalog: &MovieCatalog, title: &str) -> Option<MovieDetailRecord> {
    match find_row(catalog, title) {
        Some(row) => Some(MovieDetailRecord::from_row(row, title)),
        None => {
            debug!("No catalog entry matches {:?}", title);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::DetailValue;
    use catalog::columns;

    fn catalog() -> MovieCatalog {
        MovieCatalog::from_rows(vec![
            CatalogRow::new()
                .with(columns::TITLE, "Heat Wave")
                .with(columns::YEAR, 1990.0),
            CatalogRow::new()
                .with(columns::TITLE, "Heat")
                .with(columns::YEAR, 1995.0),
            CatalogRow::new()
                .with(columns::TITLE, "The Terminator")
                .with(columns::YEAR, 1984.0),
        ])
    }

    #[test]
    fn test_exact_match_beats_substring() {
        let record = resolve(&catalog(), "Heat").unwrap();
        assert_eq!(record.title, "Heat");
        assert_eq!(record.year, DetailValue::Value("1995".into()));
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let record = resolve(&catalog(), "heat wave").unwrap();
        assert_eq!(record.title, "Heat Wave");
    }

    #[test]
    fn test_substring_fallback() {
        let record = resolve(&catalog(), "terminator").unwrap();
        assert_eq!(record.title, "The Terminator");
    }

    #[test]
    fn test_miss_returns_none() {
        assert!(resolve(&catalog(), "Ronin").is_none());
        assert!(resolve(&MovieCatalog::new(), "Heat").is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let catalog = catalog();
        assert_eq!(resolve(&catalog, "heat"), resolve(&catalog, "heat"));
    }
}
