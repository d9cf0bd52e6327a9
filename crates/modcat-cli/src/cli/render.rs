//! Plain-text rendering of catalog entries.

use modcat_core::catalog::{Catalog, CatalogEntry, EntryId};

const NAME_WIDTH: usize = 40;

/// One list row: index, name, category.
pub fn card_line(id: EntryId, entry: &CatalogEntry) -> String {
    let name: String = entry.display_name().chars().take(NAME_WIDTH).collect();
    format!(
        "{:>5}  {:<width$} {}",
        id,
        name,
        entry.display_category(),
        width = NAME_WIDTH
    )
}

pub fn print_list(catalog: &Catalog, ids: &[EntryId]) {
    println!("{:>5}  {:<width$} {}", "INDEX", "NAME", "CATEGORY", width = NAME_WIDTH);
    for id in ids {
        if let Some(entry) = catalog.get(*id) {
            println!("{}", card_line(*id, entry));
        }
    }
}

/// Detail view lines for one entry.
pub fn detail_lines(entry: &CatalogEntry) -> Vec<String> {
    let size = entry.formatted_size();
    let mut lines = vec![
        entry.display_name(),
        format!("Games / {}", entry.display_category()),
        String::new(),
        format!("Updated:  {}", entry.formatted_updated()),
        format!("Version:  {}", entry.display_version()),
        format!("Size:     {}", size),
        format!("Genre:    {}", entry.display_category()),
    ];

    let features = entry.modifications();
    if !features.is_empty() {
        lines.push(String::new());
        lines.push("Mod Features:".to_string());
        lines.extend(features.into_iter().map(|f| format!("  - {f}")));
    }
    if let Some(note) = entry.note() {
        lines.push(String::new());
        lines.push(format!("Note: {note}"));
    }

    lines.push(String::new());
    match entry.link() {
        Some(link) => lines.push(format!("Download ({size}): {link}")),
        None => lines.push("Download link not available".to_string()),
    }
    if let Some(image) = entry.image_url() {
        lines.push(format!("Image: {image}"));
    }

    lines.push(String::new());
    lines.extend(entry.display_description().lines().map(str::to_string));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> CatalogEntry {
        let catalog = Catalog::from_json_str(&format!("[{json}]")).unwrap();
        catalog.entries()[0].clone()
    }

    #[test]
    fn card_line_pads_and_defaults() {
        let line = card_line(EntryId(3), &entry(r#"{"Category":"Null"}"#));
        assert!(line.starts_with("    3  Unknown Mod"));
        assert!(line.ends_with("General"));
    }

    #[test]
    fn detail_without_link_or_features() {
        let lines = detail_lines(&entry(
            r#"{"Name":"Adobe Photoshop Touch","Category":"Photography","M":"Null","Link":"Null","Size":"Null","U":"April 27, 2022"}"#,
        ));
        assert_eq!(lines[0], "Adobe Photoshop Touch");
        assert!(lines.contains(&"Updated:  Apr 27, 2022".to_string()));
        assert!(lines.contains(&"Size:     Unknown".to_string()));
        assert!(lines.contains(&"Download link not available".to_string()));
        assert!(!lines.iter().any(|l| l == "Mod Features:"));
    }

    #[test]
    fn detail_with_link_and_features() {
        let lines = detail_lines(&entry(
            r#"{"Name":"Vector 2","M":"Unlimited Money","Note":"Buy anything","Link":"https://dl.example.com/v2.apk","Size":"125.66"}"#,
        ));
        assert!(lines.contains(&"  - Unlimited Money".to_string()));
        assert!(lines.contains(&"Note: Buy anything".to_string()));
        assert!(lines.contains(&"Download (125.7 MB): https://dl.example.com/v2.apk".to_string()));
    }
}
