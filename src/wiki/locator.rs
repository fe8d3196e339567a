//! Invocation locator
//!
//! Finds the first `{{<name>` in a document and hands the text after the name
//! to the [template grammar](super::template). Only that first occurrence is
//! parsed: pages that repeat an infobox (older revisions pasted below, one
//! box per item version) yield the topmost one or nothing.

use super::error::GrammarError;
use super::fields::FieldPair;
use super::template::parse_body;

/// Locate and parse the first invocation of `name` in `document`.
pub fn locate(name: &str, document: &str) -> Result<Vec<FieldPair>, GrammarError> {
    let body = find_invocation(name, document)
        .ok_or_else(|| GrammarError::no_match(format!("{{{{{}", name.trim())))?;

    parse_body(body)
}

/// Return the text following the name of the first `{{<name>` occurrence.
///
/// The name is compared case-insensitively and may be preceded by whitespace.
/// It must end at a boundary (whitespace, `|`, `}` or end of input), so
/// `{{Infobox Items` is not an occurrence of `Infobox Item`.
pub fn find_invocation<'a>(name: &str, document: &'a str) -> Option<&'a str> {
    let name = name.trim();
    let mut from = 0;

    while let Some(offset) = document[from..].find("{{") {
        let open = from + offset;
        let candidate = document[open + 2..].trim_start();

        if let Some(rest) = strip_prefix_ignore_case(candidate, name) {
            if at_name_boundary(rest) {
                return Some(rest);
            }
        }

        // `{{{Name` still contains `{{Name` one byte further on.
        from = open + 1;
    }

    None
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    let mut end = 0;

    for expected in prefix.chars() {
        let (index, actual) = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = index + actual.len_utf8();
    }

    Some(&text[end..])
}

fn at_name_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .map_or(true, |c| c.is_whitespace() || c == '|' || c == '}')
}
