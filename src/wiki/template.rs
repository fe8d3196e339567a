//! Template grammar
//!
//! Parses the body of an infobox invocation, i.e. everything after
//! `{{Infobox Bonuses`:
//!
//! ```text
//! |astab = 41
//! |aspeed = 4|slot = 2h
//! |image = Dragon claws equipped.png{{!}}130px}}
//! ```
//!
//! A field value is a non-empty run of plain fragments and nested
//! invocations, so `|caption =` with nothing before the next `|` or `}}`
//! fails the whole body. Nested
//! invocations are shallow: the first `}}` after a `{{` closes it, whatever
//! it contains. That keeps `{{!}}` and similar markup inside the value instead
//! of splitting the field at its pipe.

use chumsky::prelude::*;

use super::error::GrammarError;
use super::fields::FieldPair;
use super::lexical::{bare_token, ParserError};

/// Characters up to the next `|`, `{{` or `}}`.
fn plain_fragment() -> impl Parser<char, String, Error = ParserError> + Clone {
    choice((just("|"), just("{{"), just("}}")))
        .not()
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// `{{ ... }}`, closed by the first `}}`. Returned verbatim, braces included.
fn nested_invocation() -> impl Parser<char, String, Error = ParserError> + Clone {
    just("{{")
        .ignore_then(just("}}").not().repeated().collect::<String>())
        .then_ignore(just("}}"))
        .map(|inner| format!("{{{{{inner}}}}}"))
}

/// The concatenated, trimmed fragments of one field value.
fn field_value() -> impl Parser<char, String, Error = ParserError> + Clone {
    plain_fragment()
        .or(nested_invocation())
        .repeated()
        .at_least(1)
        .map(|fragments| fragments.concat().trim().to_string())
}

/// `| key = value`
fn field() -> impl Parser<char, FieldPair, Error = ParserError> + Clone {
    just('|')
        .ignore_then(bare_token().padded())
        .then_ignore(just('=').padded())
        .then(field_value())
        .map(|(key, value)| FieldPair::new(key, value))
}

/// One or more fields closed by `}}`, anchored at the start of the input.
pub fn template_body() -> impl Parser<char, Vec<FieldPair>, Error = ParserError> + Clone {
    field()
        .repeated()
        .at_least(1)
        .padded()
        .then_ignore(just("}}"))
}

/// Parse an invocation body that starts right after the template name.
pub fn parse_body(body: &str) -> Result<Vec<FieldPair>, GrammarError> {
    template_body()
        .parse(body)
        .map_err(|_| GrammarError::no_match("template body"))
}
