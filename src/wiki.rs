//! Wiki field extraction
//!
//! The extraction runs in two phases:
//!
//! 1. A grammar turns text into an ordered list of [`FieldPair`]s. The template
//!    grammar is reached through the [`locator`], which finds the first
//!    `{{Name` occurrence in a document; the table grammar scans for the first
//!    `return { ... }` shape on its own.
//! 2. The pairs are folded into a [`Template`], which answers typed queries.
//!
//! All parsing is pure. A missing or malformed invocation is reported as
//! `None`, never as a panic.

pub mod error;
pub mod fields;
pub mod lexical;
pub mod locator;
pub mod table;
pub mod template;

pub use error::{FieldError, GrammarError};
pub use fields::{FieldPair, Template};

/// Parse the first `{{<name> | ... }}` invocation in `document`.
///
/// The name is matched case-insensitively. Returns `None` when the name does
/// not occur, when the first occurrence does not parse, or when it carries
/// no fields.
pub fn parse_template(name: &str, document: &str) -> Option<Template> {
    locator::locate(name, document)
        .and_then(Template::from_pairs)
        .ok()
}

/// Parse the first `return { key = value, ... }` table literal in `document`.
pub fn parse_table(document: &str) -> Option<Template> {
    table::parse_pairs(document)
        .and_then(Template::from_pairs)
        .ok()
}
