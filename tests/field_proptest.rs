//! Property-based tests for the template and table grammars
//!
//! Generated inputs stay inside the plain-value alphabet: no `|`, braces,
//! `<`, `>` or `kg`, and no sentinel words, so that the accessor returns the
//! trimmed source text unchanged.

use infobox::wiki::{parse_table, parse_template};
use proptest::prelude::*;
use std::collections::BTreeMap;

const SENTINELS: &[&str] = &["no", "n/a", "nil", "varies"];

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,()&'-]{0,20}".prop_filter("plain value", |value| {
        let trimmed = value.trim().to_lowercase();
        !trimmed.contains("kg") && !SENTINELS.contains(&trimmed.as_str())
    })
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,10}( [A-Za-z]{1,10})?"
}

/// Text that never opens an invocation.
fn noise_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,\n]{0,40}"
}

fn render(name: &str, fields: &BTreeMap<String, String>, pad: &str) -> String {
    let body: String = fields
        .iter()
        .map(|(key, value)| format!("\n|{pad}{key}{pad}={pad}{value}{pad}"))
        .collect();
    format!("{{{{{name}{body}\n}}}}")
}

proptest! {
    #[test]
    fn test_template_values_round_trip(
        name in name_strategy(),
        fields in prop::collection::btree_map(key_strategy(), value_strategy(), 1..6),
        pad in "[ \t]{0,2}",
    ) {
        let doc = render(&name, &fields, &pad);
        let template = parse_template(&name, &doc);
        prop_assert!(template.is_some(), "Failed to parse: {}", doc);

        let template = template.unwrap();
        prop_assert_eq!(template.len(), fields.len());
        for (key, value) in &fields {
            let actual = template.value(key);
            prop_assert_eq!(actual.as_deref(), Some(value.trim()));
        }
    }

    #[test]
    fn test_template_name_ignores_case(
        name in name_strategy(),
        fields in prop::collection::btree_map(key_strategy(), value_strategy(), 1..3),
    ) {
        let doc = render(&name.to_uppercase(), &fields, " ");
        prop_assert!(parse_template(&name.to_lowercase(), &doc).is_some());
    }

    #[test]
    fn test_template_ignores_surrounding_text(
        name in name_strategy(),
        fields in prop::collection::btree_map(key_strategy(), value_strategy(), 1..4),
        before in noise_strategy(),
        after in noise_strategy(),
    ) {
        let bare = render(&name, &fields, "");
        let framed = format!("{before}{bare}{after}");

        prop_assert_eq!(parse_template(&name, &bare), parse_template(&name, &framed));
    }

    #[test]
    fn test_template_absent_name_not_found(
        fields in prop::collection::btree_map(key_strategy(), value_strategy(), 1..4),
    ) {
        let doc = render("Infobox Bonuses", &fields, "");
        prop_assert!(parse_template("Infobox Item", &doc).is_none());
    }

    #[test]
    fn test_table_integers(
        values in prop::collection::btree_map(key_strategy(), any::<i32>(), 1..6),
        trailing_comma in any::<bool>(),
    ) {
        let entries: Vec<String> = values
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect();
        let comma = if trailing_comma { "," } else { "" };
        let module = format!("return {{\n  {}{comma}\n}}", entries.join(",\n  "));

        let table = parse_table(&module);
        prop_assert!(table.is_some(), "Failed to parse: {}", module);

        let table = table.unwrap();
        for (key, value) in &values {
            let expected = if *value == 0 { None } else { Some(*value) };
            prop_assert_eq!(table.integer(key), expected);
        }
    }

    #[test]
    fn test_table_quoted_strings(
        values in prop::collection::btree_map(key_strategy(), value_strategy(), 1..6),
    ) {
        let entries: Vec<String> = values
            .iter()
            .map(|(key, value)| format!("{key} = \"{value}\""))
            .collect();
        let module = format!("return {{ {} }}", entries.join(", "));

        let table = parse_table(&module).expect("table");
        for (key, value) in &values {
            prop_assert_eq!(table.raw(key), Some(value.as_str()));
        }
    }
}
