//! Item records and item name cleanup

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::DumpError;

/// Inline markup tags such as `<col=ff9040>`, as found in item names.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// One item definition: `{ "id": 13652, "name": "Dragon claws" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    pub id: u32,
    pub name: String,
}

impl ItemRecord {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read a JSON array of [`ItemRecord`]s.
pub fn load_items(path: &Path) -> Result<Vec<ItemRecord>, DumpError> {
    let text = fs::read_to_string(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| DumpError::Items {
        path: path.to_path_buf(),
        source,
    })
}

pub fn remove_tags(name: &str) -> String {
    TAG_REGEX.replace_all(name, "").into_owned()
}

/// The wiki page title for an item name, or `None` for placeholder items.
pub fn clean_item_name(raw: &str) -> Option<String> {
    if raw.eq_ignore_ascii_case("null") {
        return None;
    }

    let name = remove_tags(raw).replace('\u{a0}', " ");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// `(id, cleaned name)` for the first item carrying each name.
pub fn unique_names(items: &[ItemRecord]) -> Vec<(u32, String)> {
    let mut seen = HashSet::new();

    items
        .iter()
        .filter_map(|item| clean_item_name(&item.name).map(|name| (item.id, name)))
        .filter(|(_, name)| seen.insert(name.clone()))
        .collect()
}
