//! Core types for the movie metadata catalog.
//!
//! The catalog is tabular and loosely typed: every row maps column names to
//! values, and any column may be absent, null, or NaN for a given movie.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a row in catalog order (0-based)
pub type RowId = usize;

/// Column names the detail projection reads
pub mod columns {
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
    pub const DIRECTORS: &str = "directors";
    pub const CAST: &str = "cast";
    pub const PRODUCTION_COMPANIES: &str = "production_companies";
    pub const OVERVIEW: &str = "overview";
    pub const GENRES: &str = "genres";
    pub const RUNTIME: &str = "runtime";
    pub const VOTE_AVERAGE: &str = "vote_average";
}

// =============================================================================
// Field Values
// =============================================================================

/// A single cell of the catalog.
///
/// Numbers stay `f64` so that NaN survives as a distinct "missing" marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// True for explicit nulls, NaN numbers and empty lists
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Number(n) => n.is_nan(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Text(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            // Whole numbers (years, runtimes) print without a trailing ".0"
            FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

// =============================================================================
// Rows
// =============================================================================

/// One movie's metadata, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    fields: BTreeMap<String, FieldValue>,
}

impl CatalogRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw cell lookup; `None` means the column is absent from this row
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// The row's title, if it has a textual one
    pub fn title(&self) -> Option<&str> {
        self.get(columns::TITLE).and_then(FieldValue::as_text)
    }
}

// =============================================================================
// MovieCatalog - read-only metadata table
// =============================================================================

/// Movie metadata table in source order.
///
/// Titles are not unique. Lookups always resolve to the first row carrying a
/// title, so row order is significant and never changes after loading.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    pub(crate) rows: Vec<CatalogRow>,
    /// Lowercased title -> first row with that title
    pub(crate) title_index: HashMap<String, RowId>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from rows already in memory
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Self {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert_row(row);
        }
        catalog
    }

    /// Append a row and index its title (first occurrence wins)
    pub fn insert_row(&mut self, row: CatalogRow) -> RowId {
        let id = self.rows.len();
        if let Some(title) = row.title() {
            self.title_index.entry(title.to_lowercase()).or_insert(id);
        }
        self.rows.push(row);
        id
    }

    pub fn get_row(&self, id: RowId) -> Option<&CatalogRow> {
        self.rows.get(id)
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
