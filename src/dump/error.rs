use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the dump layer. The wiki grammars themselves never fail this way.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid item list {}: {source}", path.display())]
    Items {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
