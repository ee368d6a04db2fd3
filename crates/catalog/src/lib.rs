//! # Catalog Crate
//!
//! Loads and indexes the movie metadata catalog used for detail lookups.
//!
//! ## Main Components
//!
//! - **types**: Row and cell types plus the `MovieCatalog` table
//! - **parser**: Parse the JSON Lines catalog file into rows
//! - **index**: Load the catalog and answer title lookups
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::MovieCatalog;
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("data/movies.jsonl"))?;
//! if let Some(id) = catalog.find_exact("Heat") {
//!     println!("{:?}", catalog.get_row(id));
//! }
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use types::{CatalogRow, FieldValue, MovieCatalog, RowId, columns};
