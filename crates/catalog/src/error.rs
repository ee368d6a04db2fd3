//! Catalog loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Line is not a JSON object
    #[error("{file}:{line}: malformed catalog row ({reason})")]
    MalformedLine {
        file: String,
        line: usize,
        reason: String,
    },

    /// Nested objects (or lists of them) have no column representation
    #[error("Column '{column}' holds an unsupported value: {value}")]
    UnsupportedValue { column: String, value: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
