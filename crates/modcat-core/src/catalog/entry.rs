//! One catalog record, keyed by the upstream feed's JSON field names.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use url::Url;

use super::format::{format_date, format_file_size, sanitize_text};

/// Upstream placeholder meaning "no value".
pub const NULL_SENTINEL: &str = "Null";

/// Catalog item metadata. The value is kept exactly as published and is
/// what gets serialized; the accessors read a lenient typed view of it and
/// treat absent, empty and `"Null"` values alike as missing. Elements that
/// are not JSON objects have every field missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    raw: Value,
    fields: EntryFields,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct EntryFields {
    #[serde(rename = "Name", default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(rename = "Category", default, deserialize_with = "lenient_string")]
    category: Option<String>,
    #[serde(rename = "Image", default, deserialize_with = "lenient_string")]
    image: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    description: Option<String>,
    /// Modification notes, newline separated.
    #[serde(rename = "M", default, deserialize_with = "lenient_string")]
    modifications: Option<String>,
    #[serde(rename = "Note", default, deserialize_with = "lenient_string")]
    note: Option<String>,
    /// Last update date as published (e.g. "November 25, 2023").
    #[serde(rename = "U", default, deserialize_with = "lenient_string")]
    updated: Option<String>,
    #[serde(rename = "V", default, deserialize_with = "lenient_string")]
    version: Option<String>,
    #[serde(rename = "Link", default, deserialize_with = "lenient_string")]
    link: Option<String>,
    /// Size in megabytes as a decimal string.
    #[serde(rename = "Size", default, deserialize_with = "lenient_string")]
    size: Option<String>,
}

impl Serialize for CatalogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CatalogEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(CatalogEntry::from_value)
    }
}

/// Accept strings, numbers and booleans; anything else is kept as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != NULL_SENTINEL)
}

impl CatalogEntry {
    pub fn from_value(raw: Value) -> Self {
        let fields = if raw.is_object() {
            EntryFields::deserialize(&raw).unwrap_or_else(|e| {
                tracing::warn!("unreadable catalog entry fields: {e}");
                EntryFields::default()
            })
        } else {
            EntryFields::default()
        };
        Self { raw, fields }
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.fields.name)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.fields.category)
    }

    pub fn image(&self) -> Option<&str> {
        present(&self.fields.image)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.fields.description)
    }

    pub fn note(&self) -> Option<&str> {
        present(&self.fields.note)
    }

    pub fn updated(&self) -> Option<&str> {
        present(&self.fields.updated)
    }

    pub fn version(&self) -> Option<&str> {
        present(&self.fields.version)
    }

    pub fn link(&self) -> Option<&str> {
        present(&self.fields.link)
    }

    pub fn size(&self) -> Option<&str> {
        present(&self.fields.size)
    }

    /// True if the entry's category equals `category` exactly.
    pub fn in_category(&self, category: &str) -> bool {
        self.category() == Some(category)
    }

    pub fn display_name(&self) -> String {
        sanitize_text(self.name().unwrap_or("Unknown Mod"))
    }

    pub fn display_category(&self) -> String {
        sanitize_text(self.category().unwrap_or("General"))
    }

    pub fn display_version(&self) -> String {
        sanitize_text(self.version().unwrap_or("Unknown"))
    }

    pub fn display_description(&self) -> &str {
        self.description().unwrap_or("No description available")
    }

    /// Image URL if present and absolute.
    pub fn image_url(&self) -> Option<Url> {
        self.image().and_then(|s| Url::parse(s).ok())
    }

    /// Size in megabytes, if the field holds a finite number.
    pub fn size_mb(&self) -> Option<f64> {
        self.size()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|n| n.is_finite())
    }

    pub fn formatted_size(&self) -> String {
        format_file_size(self.size_mb())
    }

    pub fn formatted_updated(&self) -> String {
        self.updated()
            .map(format_date)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Modification notes, one per line, sanitized. Empty when missing.
    pub fn modifications(&self) -> Vec<String> {
        match present(&self.fields.modifications) {
            Some(raw) => sanitize_text(raw)
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sentinel_and_blank_are_missing() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{"Name":"X8 Sandbox","M":"Null","Link":"  ","Size":"Null"}"#,
        )
        .unwrap();
        assert_eq!(entry.name(), Some("X8 Sandbox"));
        assert!(entry.modifications().is_empty());
        assert!(entry.link().is_none());
        assert!(entry.size_mb().is_none());
        assert_eq!(entry.formatted_size(), "Unknown");
        assert_eq!(entry.display_category(), "General");
    }

    #[test]
    fn numeric_fields_are_accepted_as_text() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"Name":"A","Size":125.66,"V":2}"#).unwrap();
        assert_eq!(entry.size(), Some("125.66"));
        assert_eq!(entry.version(), Some("2"));
        assert_eq!(entry.formatted_size(), "125.7 MB");
    }

    #[test]
    fn serializes_exactly_as_published() {
        let json = r#"{"Size":125.66,"Name":"A","V":2,"Note":null,"Rating":4.5,"Tags":["x","y"]}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.version(), Some("2"));
        assert!(entry.note().is_none());
        assert_eq!(serde_json::to_string(&entry).unwrap(), json);
    }

    #[test]
    fn non_object_element_has_no_fields() {
        let entry = CatalogEntry::from_value(Value::String("B".to_string()));
        assert!(entry.name().is_none());
        assert_eq!(entry.display_name(), "Unknown Mod");
        assert_eq!(serde_json::to_string(&entry).unwrap(), r#""B""#);
    }

    #[test]
    fn modifications_split_into_lines() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"M":"Unlimited Coins\nUnlimited <b>Ban-Kin</b>\n"}"#).unwrap();
        assert_eq!(
            entry.modifications(),
            vec!["Unlimited Coins".to_string(), "Unlimited bBan-Kin/b".to_string()]
        );
    }

    #[test]
    fn image_url_requires_absolute_url() {
        let ok: CatalogEntry =
            serde_json::from_str(r#"{"Image":"https://cdn.example.com/a.webp"}"#).unwrap();
        assert_eq!(ok.image_url().unwrap().host_str(), Some("cdn.example.com"));
        let relative: CatalogEntry = serde_json::from_str(r#"{"Image":"img/a.webp"}"#).unwrap();
        assert!(relative.image_url().is_none());
    }

    #[test]
    fn display_defaults() {
        let entry = CatalogEntry::default();
        assert_eq!(entry.display_name(), "Unknown Mod");
        assert_eq!(entry.display_version(), "Unknown");
        assert_eq!(entry.display_description(), "No description available");
        assert_eq!(entry.formatted_updated(), "Unknown");
    }
}
