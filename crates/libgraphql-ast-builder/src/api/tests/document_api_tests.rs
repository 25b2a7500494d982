//! Tests for the document facade: merging input, the named type and
//! directive collections, executable lookups and printing.

use crate::api::DocumentApi;
use crate::ast::DefinitionNode;
use crate::ast::NodeKinded;
use crate::build;
use crate::parse::DocumentInput;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::json;

const SCHEMA: &str = r#"
    type User {
      id: ID!
      name: String
    }

    enum Role { ADMIN USER }

    directive @auth(role: Role) on FIELD_DEFINITION
"#;

/// Verifies the add/rename/missing-field flow on a type's fields, including
/// the message of the failure.
#[test]
fn field_editing_end_to_end() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();
    let mut user = doc.get_object_type("User").unwrap();

    user.create_field("email").unwrap();
    assert_eq!(user.field_names(), vec!["id", "name", "email"]);

    user.update_field("email", "contactEmail").unwrap();
    assert!(!user.has_field("email"));
    assert!(user.has_field("contactEmail"));

    let err = user.update_field("email", "primaryEmail").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot update `email` in fields of ObjectTypeDefinition `User` because it does not exist",
    );
}

#[test]
fn type_names_and_lookup() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();
    assert_eq!(doc.type_names(), vec!["User", "Role"]);
    assert!(doc.has_type("Role"));
    assert!(!doc.has_type("auth"));

    let role = doc.get_enum_type("Role").unwrap();
    assert_eq!(role.node().values.len(), 2);

    let err = doc.get_type("Post").unwrap_err();
    assert_eq!(
        err,
        AstBuildError::NotFound {
            action: "get",
            collection: "types",
            name: "Post".to_string(),
            parent: "Document".to_string(),
        },
    );
}

/// Verifies that a typed getter on a type of another kind reports both
/// kinds.
#[test]
fn typed_getter_kind_mismatch() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();
    let err = doc.get_object_type("Role").err().unwrap();
    assert_eq!(
        err,
        AstBuildError::KindMismatch {
            expected: NodeKind::ObjectTypeDefinition,
            actual: NodeKind::EnumTypeDefinition,
        },
    );
}

#[test]
fn create_type_conflicts_on_existing_name() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();
    let err = doc
        .create_type(json!({ "kind": "ScalarTypeDefinition", "name": "User" }))
        .err()
        .unwrap();
    assert!(matches!(
        err,
        AstBuildError::Conflict { collection: "types", ref name, .. } if name == "User",
    ));
}

#[test]
fn create_type_returns_wrapper() {
    let mut doc = DocumentApi::new();
    let mut created = doc
        .create_type(json!({ "kind": "InputObjectTypeDefinition", "name": "UserFilter" }))
        .unwrap();
    assert!(created.is_input_type());
    created.description().set(Some("Filters users"));

    assert_eq!(doc.type_names(), vec!["UserFilter"]);
    let filter = doc.get_input_type("UserFilter").unwrap();
    assert_eq!(filter.node().description.as_ref().unwrap().value, "Filters users");
}

/// Verifies that two type definitions with the same name cannot be merged.
#[test]
fn duplicate_types_in_input_conflict() {
    let err = DocumentApi::from_input(vec!["scalar Date", "scalar Date"]).unwrap_err();
    assert!(matches!(err, AstBuildError::Conflict { action: "create", .. }));
}

/// Verifies that adopting a built document applies the same uniqueness
/// checks as adding its definitions one by one.
#[test]
fn from_document_checks_type_names() {
    let duplicated = build::document_node(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
        { "kind": "ScalarTypeDefinition", "name": "Date" },
    ])).unwrap();
    let err = DocumentApi::from_document(duplicated.clone()).unwrap_err();
    assert!(matches!(err, AstBuildError::Conflict { action: "create", .. }));
    assert!(DocumentApi::try_from(duplicated).is_err());

    let built = build::document_node(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
        { "kind": "OperationDefinition", "name": "Viewer", "selections": ["id"] },
    ])).unwrap();
    let doc = DocumentApi::try_from(built).unwrap();
    assert_eq!(doc.type_names(), vec!["Date"]);
    assert_eq!(doc.definitions().len(), 2);
}

#[test]
fn upsert_update_remove_type() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();

    doc.upsert_type(json!({ "kind": "ScalarTypeDefinition", "name": "Date" })).unwrap();
    doc.upsert_type(json!({
        "kind": "ScalarTypeDefinition",
        "name": "Date",
        "description": "ISO-8601",
    })).unwrap();
    assert_eq!(doc.type_names(), vec!["User", "Role", "Date"]);

    let renamed = doc.update_type("Date", "DateTime").unwrap();
    assert_eq!(renamed.node().name().value, "DateTime");

    let removed = doc.remove_type("Role").unwrap();
    assert_eq!(removed.kind(), NodeKind::EnumTypeDefinition);
    assert_eq!(doc.type_names(), vec!["User", "DateTime"]);
    assert!(doc.remove_type("Role").is_err());
}

/// Verifies that directive definitions are a collection of their own,
/// separate from the types.
#[test]
fn directive_definitions() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();
    assert_eq!(doc.directive_definition_names(), vec!["auth"]);

    doc.create_directive_definition(json!({
        "name": "cached",
        "arguments": ["ttl: Int"],
        "locations": ["QUERY"],
    })).unwrap();
    assert_eq!(doc.directive_definition_names(), vec!["auth", "cached"]);

    let auth = doc.get_directive_definition("auth").unwrap();
    assert_eq!(auth.locations(), vec!["FIELD_DEFINITION"]);

    assert!(doc.create_directive_definition("auth").is_err());
    assert!(doc.get_directive_definition("User").is_err());
}

#[test]
fn operations_stay_out_of_type_collection() {
    let mut doc = DocumentApi::new();
    let operation: DefinitionNode = build::definition_node(json!({
        "kind": "OperationDefinition",
        "name": "Viewer",
    })).unwrap();
    doc.add_definition(operation).unwrap();
    assert_eq!(doc.operation_names(), vec!["Viewer"]);
    assert!(doc.type_names().is_empty());
}

#[test]
fn operations_and_fragments() {
    let mut doc = DocumentApi::from_input(r#"
        query Viewer { viewer { id } }
        { ping }
        fragment UserParts on User { id }
    "#).unwrap();

    assert_eq!(doc.operation_names(), vec!["Viewer"]);
    assert_eq!(doc.fragment_names(), vec!["UserParts"]);
    assert_eq!(doc.definitions().len(), 3);

    let viewer = doc.get_operation("Viewer").unwrap();
    assert_eq!(viewer.node().selection_set.selections.len(), 1);

    let frag = doc.get_fragment("UserParts").unwrap();
    assert_eq!(frag.type_condition(), "User");

    assert!(matches!(
        doc.get_operation("Missing").err().unwrap(),
        AstBuildError::NotFound { collection: "operations", .. },
    ));
}

/// Verifies that named definitions are keyed in document order and unnamed
/// ones are left out.
#[test]
fn definitions_by_name() {
    let doc = DocumentApi::from_input(vec![
        "schema { query: User }",
        SCHEMA,
    ]).unwrap();
    let names: Vec<_> = doc.definitions_by_name().keys().copied().collect();
    assert_eq!(names, vec!["User", "Role", "auth"]);
    assert_eq!(doc.definitions().len(), 4);
}

#[test]
fn merges_text_and_documents() {
    let built = build::document_node(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
    ])).unwrap();
    let mut doc = DocumentApi::from_input(DocumentInput::Many(vec![
        SCHEMA.into(),
        built.into(),
    ])).unwrap();
    doc.add_sdl("scalar Time").unwrap();
    assert_eq!(doc.type_names(), vec!["User", "Role", "Date", "Time"]);
}

#[test]
fn to_sdl_prints_edits() {
    let mut doc = DocumentApi::from_input(SCHEMA).unwrap();
    doc.get_object_type("User").unwrap().create_field("email: String!").unwrap();

    let sdl = doc.to_sdl().unwrap();
    assert!(sdl.contains("email: String!"));
    assert!(sdl.contains("enum Role"));

    let reparsed = DocumentApi::from_input(sdl.as_str()).unwrap();
    assert_eq!(reparsed.document(), doc.document());
}
