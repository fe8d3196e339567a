//! Error types for the grammar and accessor layers
//!
//! Neither error escapes the public query API: grammar failures become a
//! missing [`Template`](super::Template) and numeric failures become a
//! missing field. They are exposed for callers that work with the grammar
//! entry points directly.

use thiserror::Error;

/// Why a grammar produced no field list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// No invocation or table literal of the expected shape was found.
    #[error("no match for {0}")]
    NoMatch(String),

    /// The shape matched but carried zero fields.
    #[error("{0} matched with no fields")]
    Empty(String),
}

impl GrammarError {
    pub(crate) fn no_match(what: impl Into<String>) -> Self {
        GrammarError::NoMatch(what.into())
    }
}

/// Why a present field value could not be read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field `{key}` is not a number: {value:?}")]
    NotANumber { key: String, value: String },
}
