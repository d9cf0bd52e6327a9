//! Catalog model.
//!
//! A catalog is the ordered list of entries published by the upstream feed.
//! Entries are addressed by position (`EntryId`); the first entries are the
//! newest. Position is also what detail views link to, so reordering the
//! upstream feed changes what a previously shared index refers to.

mod entry;
mod format;
mod parse;

pub use entry::{CatalogEntry, NULL_SENTINEL};
pub use format::{format_date, format_file_size, sanitize_text};
pub use parse::PayloadError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category label that selects every entry.
pub const ALL_CATEGORIES: &str = "All";

const SAMPLE_CATALOG_JSON: &str = include_str!("sample_catalog.json");

/// Position of an entry within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Ordered sequence of entries, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a payload. Only a top-level array of objects is accepted.
    pub fn from_json_str(s: &str) -> Result<Self, PayloadError> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        parse::catalog_from_value(value)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, PayloadError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        parse::catalog_from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        parse::catalog_from_value(value)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.get(id.0)
    }

    pub fn ids(&self) -> Vec<EntryId> {
        (0..self.entries.len()).map(EntryId).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &CatalogEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    /// The first `n` entries.
    pub fn newest(&self, n: usize) -> Vec<EntryId> {
        (0..n.min(self.entries.len())).map(EntryId).collect()
    }

    /// Distinct categories in first-seen order; missing categories are skipped.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if let Some(cat) = entry.category() {
                if !out.contains(&cat) {
                    out.push(cat);
                }
            }
        }
        out
    }

    /// Ids of entries in `category`; `None` or "All" selects everything.
    pub fn in_category(&self, category: Option<&str>) -> Vec<EntryId> {
        match category {
            None | Some(ALL_CATEGORIES) => self.ids(),
            Some(cat) => self.ids_where(|e| e.in_category(cat)),
        }
    }

    pub fn ids_where<F>(&self, mut pred: F) -> Vec<EntryId>
    where
        F: FnMut(&CatalogEntry) -> bool,
    {
        self.iter()
            .filter(|(_, e)| pred(e))
            .map(|(id, _)| id)
            .collect()
    }

    /// Resolve a user-supplied index. Anything unparsable or out of range
    /// falls back to the first entry; `None` only when the catalog is empty.
    pub fn resolve_index(&self, raw: &str) -> Option<EntryId> {
        if self.entries.is_empty() {
            return None;
        }
        match raw.trim().parse::<usize>() {
            Ok(i) if i < self.entries.len() => Some(EntryId(i)),
            _ => {
                tracing::debug!(
                    "index {:?} invalid for catalog of {} entries, using 0",
                    raw,
                    self.entries.len()
                );
                Some(EntryId(0))
            }
        }
    }
}

/// Built-in catalog served when nothing else is available and the
/// exhaustion policy asks for sample data.
pub fn sample_catalog() -> Catalog {
    Catalog::from_json_str(SAMPLE_CATALOG_JSON).unwrap_or_else(|e| {
        tracing::error!("built-in sample catalog is invalid: {e}");
        Catalog::default()
    })
}
