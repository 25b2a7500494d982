use crate::commands::add_field::upsert_field;
use libgraphql_ast_builder::DocumentApi;

const SCHEMA: &str = r#"
    type User { id: ID! }
    scalar Date
"#;

fn add(document: &mut DocumentApi, type_name: &str, field: &str) -> anyhow::Result<()> {
    upsert_field(document.get_type(type_name)?, field)
}

#[test]
fn adds_a_missing_field() {
    let mut document = DocumentApi::from_input(SCHEMA).unwrap();
    add(&mut document, "User", "email").unwrap();
    let sdl = document.to_sdl().unwrap();
    assert!(sdl.contains("email: String"), "{sdl}");
}

/// Verifies that a bare name keeps the type of an existing field and a
/// typed one retypes it.
#[test]
fn existing_field_keeps_or_changes_its_type() {
    let mut document = DocumentApi::from_input(SCHEMA).unwrap();

    add(&mut document, "User", "id").unwrap();
    let sdl = document.to_sdl().unwrap();
    assert!(sdl.contains("id: ID!"), "{sdl}");

    add(&mut document, "User", "id: Int").unwrap();
    let sdl = document.to_sdl().unwrap();
    assert!(sdl.contains("id: Int"), "{sdl}");
    assert!(!sdl.contains("id: ID!"), "{sdl}");
}

#[test]
fn types_without_fields_are_rejected() {
    let mut document = DocumentApi::from_input(SCHEMA).unwrap();
    let err = add(&mut document, "Date", "id").unwrap_err();
    assert_eq!(err.to_string(), "`Date` is a ScalarTypeDefinition, which has no fields.");
}
