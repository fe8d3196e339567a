//! Table-literal grammar
//!
//! Data modules publish their values as a single returned table:
//!
//! ```text
//! return {
//!     itemId     = 13652,
//!     date       = '12:18, November 08, 2018 (UTC)',
//!     limit      = nil,
//!     members    = true,
//! }
//! ```
//!
//! Only flat `key = scalar` entries are understood. The grammar is matched at
//! the first `return` keyword where the whole shape fits; any text around it
//! is ignored.

use chumsky::prelude::*;
use chumsky::Stream;

use super::error::GrammarError;
use super::fields::FieldPair;
use super::lexical::{bare_token, scalar, ParserError};

const KEYWORD: &str = "return";

/// `key = value` followed by an optional comma, whitespace allowed around every token.
fn entry() -> impl Parser<char, FieldPair, Error = ParserError> + Clone {
    bare_token()
        .then_ignore(just('=').padded())
        .then(scalar())
        .padded()
        .then_ignore(just(',').or_not())
        .padded()
        .map(|(key, value)| FieldPair::new(key, value))
}

/// `return { entry* }`, anchored at the start of the input.
pub fn table_literal() -> impl Parser<char, Vec<FieldPair>, Error = ParserError> + Clone {
    just(KEYWORD)
        .ignore_then(just('{').padded())
        .ignore_then(entry().repeated())
        .then_ignore(just('}'))
}

/// Find the first table literal in `text` and return its entries in source order.
///
/// `return {}` matches with an empty list; rejecting it is left to
/// [`Template::from_pairs`](super::Template::from_pairs).
pub fn parse_pairs(text: &str) -> Result<Vec<FieldPair>, GrammarError> {
    let parser = table_literal();
    let end = text.len();

    // Only keywords followed by `{` are tried, and each one is fed lazily
    // with byte spans instead of re-counting the rest of the text.
    text.match_indices(KEYWORD)
        .filter(|(start, _)| text[start + KEYWORD.len()..].trim_start().starts_with('{'))
        .find_map(|(start, _)| {
            let stream = Stream::from_iter(
                end..end,
                text[start..]
                    .char_indices()
                    .map(move |(offset, c)| (c, start + offset..start + offset + c.len_utf8())),
            );
            parser.parse(stream).ok()
        })
        .ok_or_else(|| GrammarError::no_match("table literal"))
}
