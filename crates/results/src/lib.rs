//! Result composition and detail resolution.
//!
//! This crate provides:
//! - `composer`: flattens an engine result into one rank-ordered list
//! - `resolver`: resolves a selected title to catalog metadata
//! - `details`: the fully-defaulted `MovieDetailRecord`
//! - `display`: truncation and plain-text view models for front ends
//!
//! ## Example Usage
//! ```ignore
//! use results::{flatten, resolve};
//!
//! let ranked = flatten(&result, 10);
//! let details = resolve(engine.movies(), &ranked[4].title);
//! ```

pub mod composer;
pub mod details;
pub mod display;
pub mod resolver;

pub use composer::{RankedMovie, Track, flatten, title_from_selection};
pub use details::{DetailValue, MovieDetailRecord};
pub use display::{DetailView, RowView, truncate_overview};
pub use resolver::resolve;
