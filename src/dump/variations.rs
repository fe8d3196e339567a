//! Item variations: ids whose names differ only by charge, dose, colour or
//! similar decoration.

use once_cell::sync::Lazy;
use regex::Regex;
use indexmap::IndexMap;

use super::items::{remove_tags, ItemRecord};

/// Rewrites applied in order to a lower-cased item name.
static REWRITES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"null", ""),
        (r"\([^)]+\)", ""),
        (r"[^a-zA-Z0-9 ]", ""),
        (r" [0-9]+|[0-9]+ ", ""),
        (r"uncharged | uncharged", ""),
        (r"new | new", ""),
        (r" full", ""),
        (r"half a ", ""),
        (r"part ", ""),
        (r"  ", " "),
        (r"\w+ slayer helmet", "slayer helmet"),
        (r"\w+ abyssal whip", "abyssal whip"),
        (r"magma helm|tanzanite helm", "serpentine helm"),
        (r"trident of the seas", "trident"),
        (r"trident of the swamp", "toxic trident"),
        (r"toxic staff of the dead", "toxic staff"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// The shared name of an item's variation group, `None` when nothing is left.
pub fn variation_name(raw: &str) -> Option<String> {
    let name = REWRITES.iter().fold(
        remove_tags(raw).to_lowercase(),
        |name, (regex, replacement)| regex.replace_all(&name, *replacement).into_owned(),
    );

    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Group item ids by [`variation_name`], keeping only groups of two or more.
///
/// Groups come out in the order their first item appears.
pub fn group_variations(items: &[ItemRecord]) -> IndexMap<String, Vec<u32>> {
    let mut groups: IndexMap<String, Vec<u32>> = IndexMap::new();

    for item in items {
        if let Some(name) = variation_name(&item.name) {
            groups.entry(name).or_default().push(item.id);
        }
    }

    groups.retain(|_, ids| ids.len() > 1);
    groups
}
