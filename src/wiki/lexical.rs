//! Lexical primitives shared by the table and template grammars

use chumsky::prelude::*;

/// Parser error type used across the wiki grammars.
pub type ParserError = Simple<char>;

/// Characters allowed in a bare key or token: letters, digits, `-` and `_`.
pub fn is_token_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || c == '-' || c == '_'
}

/// A bare key or scalar token such as `high`, `image_1`, `-205000` or `nil`.
pub fn bare_token() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| is_token_char(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
}

fn quoted(quote: char) -> impl Parser<char, String, Error = ParserError> + Clone {
    just(quote)
        .ignore_then(none_of(quote).repeated().collect::<String>())
        .then_ignore(just(quote))
}

/// A `'...'` or `"..."` string. No escapes: the first matching quote closes it.
pub fn quoted_string() -> impl Parser<char, String, Error = ParserError> + Clone {
    quoted('\'').or(quoted('"'))
}

/// A table literal value: quoted string or bare token.
pub fn scalar() -> impl Parser<char, String, Error = ParserError> + Clone {
    quoted_string().or(bare_token())
}
