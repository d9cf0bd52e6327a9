//! Parse a JSON payload into a Catalog.

use serde_json::Value;
use thiserror::Error;

use super::{Catalog, CatalogEntry};

/// Why a payload was rejected as a catalog.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array, got {0}")]
    NotAnArray(&'static str),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Any top-level array is a catalog. Elements are kept as published, so
/// positions match the upstream array even when an element is not an object.
pub(crate) fn catalog_from_value(value: Value) -> Result<Catalog, PayloadError> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(PayloadError::NotAnArray(json_kind(&other))),
    };
    let odd = items.iter().filter(|item| !item.is_object()).count();
    if odd > 0 {
        tracing::debug!("{odd} of {} catalog elements are not objects", items.len());
    }
    let entries = items.into_iter().map(CatalogEntry::from_value).collect();
    Ok(Catalog::from_entries(entries))
}
