//! Parsed field mapping and typed accessors
//!
//! The grammars record every value exactly as written (trimmed). All
//! interpretation happens here:
//!
//! - `""`, `no`, `n/a`, `nil` and `varies` (any case) mean "no value";
//! - `kg`, `<` and `>` are stripped from what remains;
//! - a numeric field that parses to zero is treated as missing.
//!
//! The last rule lets callers chain suffixed keys (`astab2`, `astab1`,
//! `astab`) and take the first present value, since an unused version slot is
//! conventionally filled with `0`.

use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

use super::error::{FieldError, GrammarError};

/// Raw values that read as "no data". Compared case-insensitively.
const SENTINELS: &[&str] = &["no", "n/a", "nil", "varies"];

/// One `key = value` as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPair {
    pub key: String,
    pub value: String,
}

impl FieldPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A parsed invocation or table literal.
///
/// Always holds at least one field. Keys are case-sensitive; when the source
/// repeats a key the last value wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fields: HashMap<String, String>,
}

impl Template {
    /// Fold grammar output into a mapping. An empty field list is rejected.
    pub fn from_pairs(pairs: Vec<FieldPair>) -> Result<Self, GrammarError> {
        if pairs.is_empty() {
            return Err(GrammarError::Empty("field list".to_string()));
        }

        let fields = pairs
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect();

        Ok(Self { fields })
    }

    /// The value exactly as recorded by the grammar.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The cleaned value of `key`, or `None` if it is missing or a sentinel.
    ///
    /// Every `kg` and every `<`/`>` is removed, so `0.453 kg` reads as
    /// `0.453 ` and `<1` as `1`.
    pub fn value(&self, key: &str) -> Option<String> {
        let raw = self.raw(key)?;

        if is_sentinel(raw) {
            return None;
        }

        let cleaned = raw.replace("kg", "").replace(['<', '>'], "");
        (!cleaned.is_empty()).then_some(cleaned)
    }

    /// `Some(true)` whenever [`value`](Self::value) is present.
    ///
    /// There is no `Some(false)`: `No` is a sentinel and comes back as
    /// `None`, and any other text (even `false`) reads as `true`.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.value(key).map(|_| true)
    }

    /// The value as a float. Missing, unparsable and zero all give `None`.
    ///
    /// Surrounding whitespace is ignored, so `0.453 kg` reads as `0.453`.
    pub fn double(&self, key: &str) -> Option<f64> {
        let value = self.value(key)?;
        nonzero(parse_number(key, value.trim()))
    }

    /// The value as an integer. Missing, unparsable and zero all give `None`.
    ///
    /// Unlike [`double`](Self::double), any whitespace left by the clean-up
    /// makes the value unparsable: `5 kg` is not an integer.
    pub fn integer(&self, key: &str) -> Option<i32> {
        let value = self.value(key)?;
        nonzero(parse_number(key, &value))
    }
}

fn nonzero<T: Default + PartialEq>(number: Result<T, FieldError>) -> Option<T> {
    number.ok().filter(|number| *number != T::default())
}

fn is_sentinel(raw: &str) -> bool {
    raw.is_empty()
        || SENTINELS
            .iter()
            .any(|sentinel| raw.eq_ignore_ascii_case(sentinel))
}

/// Parse a cleaned field value as written.
pub fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, FieldError> {
    value
        .parse::<T>()
        .map_err(|_| FieldError::NotANumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}
