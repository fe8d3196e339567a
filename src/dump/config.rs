//! Dumper configuration
//!
//! Layers, lowest first: the embedded `defaults/infobox.default.toml`, an
//! optional `--config` file, then CLI flags.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/infobox.default.toml");

/// Top-level configuration consumed by the dumpers.
#[derive(Debug, Clone, Deserialize)]
pub struct DumpConfig {
    pub pages: PagesConfig,
    pub output: OutputConfig,
    pub templates: TemplatesConfig,
}

/// Where raw page text is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct PagesConfig {
    pub dir: PathBuf,
    pub extension: String,
    pub exchange_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub pretty: bool,
}

/// Names of the infoboxes read by the stats dumper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplatesConfig {
    pub item: String,
    pub bonuses: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            item: "Infobox Item".to_string(),
            bonuses: "Infobox Bonuses".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file over the defaults. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `pages.dir`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DumpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
