//! Exchange buy limits from `Module:Exchange/<item>` data modules

use indexmap::IndexMap;
use tracing::{debug, info};

use super::error::DumpError;
use super::items::{unique_names, ItemRecord};
use super::pages::PageSource;
use crate::wiki::parse_table;

/// The positive `limit` entry of an exchange module, if any.
pub fn item_limit(module: &str) -> Option<i32> {
    parse_table(module)?
        .integer("limit")
        .filter(|limit| *limit > 0)
}

/// Buy limits keyed by item name, read from `<exchange_prefix><name>` pages.
pub fn dump_item_limits<S>(
    items: &[ItemRecord],
    pages: &S,
    exchange_prefix: &str,
) -> Result<IndexMap<String, i32>, DumpError>
where
    S: PageSource + ?Sized,
{
    let mut limits = IndexMap::new();

    for (id, name) in unique_names(items) {
        let title = format!("{exchange_prefix}{name}");
        let Some(module) = pages.page(&title)?.filter(|module| !module.is_empty()) else {
            debug!(id, title = %title, "no exchange module");
            continue;
        };

        let Some(limit) = item_limit(&module) else {
            debug!(id, name = %name, "no limit");
            continue;
        };

        info!(id, name = %name, limit, "dumped item limit");
        limits.insert(name, limit);
    }

    Ok(limits)
}
