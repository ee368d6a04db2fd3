//! Display-safe projection of a catalog row.
//!
//! Every field of a [`MovieDetailRecord`] is fully defaulted, so rendering
//! code never has to special-case null, NaN or empty values.

use catalog::{CatalogRow, FieldValue, columns};
use serde::Serialize;
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_OVERVIEW: &str = "No overview available.";

/// A scalar detail that may be unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DetailValue {
    Value(String),
    NotAvailable,
}

impl DetailValue {
    pub fn is_available(&self) -> bool {
        matches!(self, DetailValue::Value(_))
    }
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Value(v) => f.write_str(v),
            DetailValue::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Full metadata for one movie, with defaults already substituted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailRecord {
    pub title: String,
    pub year: DetailValue,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
    pub production_companies: Vec<String>,
    pub overview: String,
    pub genres: Vec<String>,
    pub runtime: DetailValue,
    pub vote_average: DetailValue,
}

impl MovieDetailRecord {
    /// Project `row` onto the detail fields.
    ///
    /// `requested_title` stands in when the row has no usable title.
    pub fn from_row(row: &CatalogRow, requested_title: &str) -> Self {
        Self {
            title: text(row, columns::TITLE).unwrap_or_else(|| requested_title.to_string()),
            year: scalar(row, columns::YEAR),
            directors: list(row, columns::DIRECTORS),
            cast: list(row, columns::CAST),
            production_companies: list(row, columns::PRODUCTION_COMPANIES),
            overview: text(row, columns::OVERVIEW).unwrap_or_else(|| NO_OVERVIEW.to_string()),
            genres: list(row, columns::GENRES),
            runtime: scalar(row, columns::RUNTIME),
            vote_average: scalar(row, columns::VOTE_AVERAGE),
        }
    }
}

fn present<'a>(row: &'a CatalogRow, column: &str) -> Option<&'a FieldValue> {
    row.get(column).filter(|value| !value.is_missing())
}

fn text(row: &CatalogRow, column: &str) -> Option<String> {
    present(row, column).map(|value| value.to_string())
}

fn scalar(row: &CatalogRow, column: &str) -> DetailValue {
    present(row, column)
        .map(|value| DetailValue::Value(value.to_string()))
        .unwrap_or(DetailValue::NotAvailable)
}

fn list(row: &CatalogRow, column: &str) -> Vec<String> {
    match present(row, column) {
        Some(FieldValue::List(items)) => items.clone(),
        // A lone value in a list column is a one-element list
        Some(other) => vec![other.to_string()],
        None => Vec::new(),
    }
}
