//! Catalog loading and title lookups.
//!
//! Title matching is case-insensitive. Exact lookups go through the title
//! index; substring lookups scan rows in catalog order so the first matching
//! row wins.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl MovieCatalog {
    /// Load the catalog from a JSON Lines file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());

        let rows = parser::parse_catalog(path)?;
        let catalog = Self::from_rows(rows);

        info!(
            "Loaded {} catalog rows ({} distinct titles)",
            catalog.len(),
            catalog.title_index.len()
        );
        Ok(catalog)
    }

    /// First row whose title equals `title`, ignoring case
    pub fn find_exact(&self, title: &str) -> Option<RowId> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    /// First row whose title contains `fragment`, ignoring case.
    ///
    /// Rows without a textual title never match.
    pub fn find_containing(&self, fragment: &str) -> Option<RowId> {
        let needle = fragment.to_lowercase();
        self.rows.iter().position(|row| {
            row.title()
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MovieCatalog {
        MovieCatalog::from_rows(vec![
            CatalogRow::new().with(columns::TITLE, "Heat Wave"),
            CatalogRow::new().with(columns::TITLE, "Heat"),
            CatalogRow::new().with(columns::TITLE, FieldValue::Null),
            CatalogRow::new().with(columns::TITLE, "HEAT").with(columns::YEAR, 2013.0),
        ])
    }

    #[test]
    fn test_find_exact_ignores_case() {
        let catalog = catalog();
        assert_eq!(catalog.find_exact("heat"), Some(1));
        assert_eq!(catalog.find_exact("HEAT WAVE"), Some(0));
        assert_eq!(catalog.find_exact("Ronin"), None);
    }

    #[test]
    fn test_find_containing_returns_first_in_order() {
        let catalog = catalog();
        assert_eq!(catalog.find_containing("eat"), Some(0));
        assert_eq!(catalog.find_containing("WAVE"), Some(0));
        assert_eq!(catalog.find_containing("ronin"), None);
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_row() {
        let catalog = catalog();
        let id = catalog.find_exact("Heat").unwrap();
        assert!(catalog.get_row(id).unwrap().get(columns::YEAR).is_none());
    }
}
