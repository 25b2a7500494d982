use crate::parse::definition_starts::definition_starts;

fn starts_of(src: &str) -> Vec<&str> {
    definition_starts(src)
        .into_iter()
        .map(|start| src[start..].split_whitespace().next().unwrap_or_default())
        .collect()
}

#[test]
fn keywords_at_top_level() {
    let src = "type A { query: Int }\nquery Q { type }\nextend enum E { X }";
    assert_eq!(starts_of(src), vec!["type", "query", "extend", "enum"]);
}

/// Verifies that a description opens its definition and the keyword after
/// it is not a second start.
#[test]
fn description_starts_its_definition() {
    let src = "\"\"\"\nA \"type\"\n\"\"\"\ntype A { id: ID }\n\"B\" scalar B";
    let starts = definition_starts(src);
    assert_eq!(starts.len(), 2);
    assert_eq!(starts[0], 0);
    assert!(src[starts[1]..].starts_with("\"B\""));
}

#[test]
fn comments_and_nested_strings_are_skipped() {
    let src = "# type in a comment\nscalar S @tag(name: \"query {\")\n{ a }";
    assert_eq!(starts_of(src), vec!["scalar"]);
}

/// Verifies that an anonymous query after a block starts a definition.
#[test]
fn shorthand_query_after_block() {
    let src = "type A { id: ID }\n{ a }";
    assert_eq!(starts_of(src), vec!["type", "{"]);
}
