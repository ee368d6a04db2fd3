//! Parser for the catalog file.
//!
//! The catalog is stored as JSON Lines: one object per movie, keys are column
//! names. Values may be strings, numbers, arrays of strings, or `null`.
//! A key that is absent simply means the value is missing for that movie.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogRow, FieldValue};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a catalog file into rows, preserving file order.
///
/// Blank lines are skipped. Lines are decoded in parallel and any malformed
/// line fails the whole load.
pub fn parse_catalog(path: &Path) -> Result<Vec<CatalogRow>> {
    if !path.exists() {
        return Err(CatalogError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let lines: Vec<&str> = content.lines().collect();
    lines
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_row(line, &file, idx + 1))
        .collect()
}

/// Parse a single JSON object line into a row
pub fn parse_row(line: &str, file: &str, line_no: usize) -> Result<CatalogRow> {
    let parse_error = |reason: String| CatalogError::MalformedLine {
        file: file.to_string(),
        line: line_no,
        reason,
    };

    let value: Value = serde_json::from_str(line.trim()).map_err(|e| parse_error(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(parse_error("expected a JSON object".to_string()));
    };

    let mut row = CatalogRow::new();
    for (column, raw) in object {
        let value = field_value_from_json(&column, raw)?;
        row.insert(column, value);
    }
    Ok(row)
}

fn field_value_from_json(column: &str, raw: Value) -> Result<FieldValue> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
        Value::Number(n) => Ok(n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null)),
        Value::String(s) => Ok(FieldValue::Text(s)),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => list.push(s),
                    Value::Number(n) => list.push(n.to_string()),
                    Value::Bool(b) => list.push(b.to_string()),
                    // Null entries inside a list carry no information
                    Value::Null => {}
                    other => {
                        return Err(CatalogError::UnsupportedValue {
                            column: column.to_string(),
                            value: other.to_string(),
                        });
                    }
                }
            }
            Ok(FieldValue::List(list))
        }
        other @ Value::Object(_) => Err(CatalogError::UnsupportedValue {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}
