//! Item dumpers
//!
//! Each dumper walks an item list, fetches the relevant wiki page through a
//! [`PageSource`](pages::PageSource), reads it with the [`wiki`](crate::wiki)
//! parsers and collects the results into a map that is written out as JSON.
//!
//! - [`stats`]: `Infobox Item` / `Infobox Bonuses` → `item_stats.json`
//! - [`limits`]: `Module:Exchange/<item>` → `item_limits.json`
//! - [`variations`]: item names only → `item_variations.json`

pub mod config;
pub mod error;
pub mod items;
pub mod limits;
pub mod pages;
pub mod stats;
pub mod variations;

pub use config::{DumpConfig, Loader};
pub use error::DumpError;
pub use items::{load_items, ItemRecord};
pub use pages::{PageDirectory, PageSource};

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const STATS_FILE: &str = "item_stats.json";
pub const LIMITS_FILE: &str = "item_limits.json";
pub const VARIATIONS_FILE: &str = "item_variations.json";

/// Serialize `value` into `<dir>/<file>`, creating `dir` as needed.
pub fn write_json<T>(dir: &Path, file: &str, value: &T, pretty: bool) -> Result<PathBuf, DumpError>
where
    T: Serialize + ?Sized,
{
    fs::create_dir_all(dir).map_err(|source| DumpError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(DumpError::Serialize)?;

    let path = dir.join(file);
    fs::write(&path, json).map_err(|source| DumpError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "wrote");
    Ok(path)
}
