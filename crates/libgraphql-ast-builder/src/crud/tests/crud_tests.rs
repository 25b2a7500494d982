//! Tests for the collection mutation engine, exercised over the fields of an
//! object type.

use crate::api::mixins::name_of;
use crate::ast::FieldDefinitionNode;
use crate::ast::NodeKinded;
use crate::build;
use crate::crud::Crud;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::json;

fn user_fields() -> Vec<FieldDefinitionNode> {
    ["id: ID!", "name: String", "email: String"]
        .into_iter()
        .map(|src| build::field_definition_node(src).unwrap())
        .collect()
}

fn fields_crud(items: &mut Vec<FieldDefinitionNode>) -> Crud<'_, FieldDefinitionNode> {
    Crud::new(
        "ObjectTypeDefinition `User`".to_string(),
        "fields",
        items,
        name_of::<FieldDefinitionNode>,
        build::build_props::<FieldDefinitionNode>,
    )
}

fn names(items: &[FieldDefinitionNode]) -> Vec<&str> {
    items.iter().map(|field| field.name.value.as_str()).collect()
}

#[test]
fn lists_and_finds_by_name() {
    let mut items = user_fields();
    let crud = fields_crud(&mut items);
    assert_eq!(crud.list_names(), vec!["id", "name", "email"]);
    assert!(crud.has("email"));
    assert!(!crud.has("age"));
    assert_eq!(crud.find("id").unwrap().type_.to_string(), "ID!");
    assert!(crud.find("age").is_none());
    assert_eq!(crud.list().len(), 3);
}

/// Verifies the message of a failed read.
#[test]
fn find_or_fail_reports_not_found() {
    let mut items = user_fields();
    let err = fields_crud(&mut items).find_or_fail("age").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot get `age` in fields of ObjectTypeDefinition `User` because it does not exist",
    );
}

/// Verifies that create appends at the end and returns the new element.
#[test]
fn create_appends() {
    let mut items = user_fields();
    let created = fields_crud(&mut items).create("age: Int").unwrap();
    assert_eq!(created.name.value, "age");
    assert_eq!(names(&items), vec!["id", "name", "email", "age"]);
}

/// Verifies that create refuses a duplicate name and leaves the collection
/// untouched.
#[test]
fn create_duplicate_conflicts() {
    let mut items = user_fields();
    let before = items.clone();
    let err = fields_crud(&mut items).create("email: String!").unwrap_err();
    assert_eq!(
        err,
        AstBuildError::Conflict {
            action: "create",
            collection: "fields",
            name: "email".to_string(),
            parent: "ObjectTypeDefinition `User`".to_string(),
        },
    );
    assert_eq!(items, before);
}

/// Verifies that a failing constructor leaves the collection untouched.
#[test]
fn create_malformed_leaves_collection() {
    let mut items = user_fields();
    let before = items.clone();
    assert!(fields_crud(&mut items).create(json!({ "type": "Int" })).is_err());
    assert_eq!(items, before);
}

/// Verifies that an object partial only overrides the fields it provides,
/// in place.
#[test]
fn update_merges_partial_props() {
    let mut items = user_fields();
    fields_crud(&mut items)
        .update("name", json!({ "type": "String!", "description": "Full name" }))
        .unwrap();

    assert_eq!(names(&items), vec!["id", "name", "email"]);
    assert_eq!(items[1].type_.to_string(), "String!");
    assert_eq!(items[1].description.as_ref().unwrap().value, "Full name");
}

/// Verifies that `null` fields in a partial are not applied.
#[test]
fn update_ignores_null_fields() {
    let mut items = user_fields();
    fields_crud(&mut items)
        .update("id", json!({ "description": "Identifier" }))
        .unwrap();
    fields_crud(&mut items)
        .update("id", json!({ "description": null, "type": null }))
        .unwrap();
    assert_eq!(items[0].description.as_ref().unwrap().value, "Identifier");
    assert_eq!(items[0].type_.to_string(), "ID!");
}

/// Verifies that a bare string renames while keeping the type, and that
/// `name: Type` also retypes.
#[test]
fn update_with_bare_string() {
    let mut items = user_fields();
    fields_crud(&mut items).update("email", "mail").unwrap();
    assert_eq!(names(&items), vec!["id", "name", "mail"]);
    assert_eq!(items[2].type_.to_string(), "String");

    fields_crud(&mut items).update("mail", "contact: [String!]").unwrap();
    assert_eq!(items[2].name.value, "contact");
    assert_eq!(items[2].type_.to_string(), "[String!]");
}

/// Verifies that renaming onto a sibling's name conflicts before anything
/// is written.
#[test]
fn update_rename_conflicts() {
    let mut items = user_fields();
    let before = items.clone();
    let err = fields_crud(&mut items).update("email", "name").unwrap_err();
    assert!(matches!(
        err,
        AstBuildError::Conflict { action: "update", ref name, .. } if name == "name",
    ));
    assert_eq!(items, before);
}

#[test]
fn update_missing_is_not_found() {
    let mut items = user_fields();
    let err = fields_crud(&mut items).update("age", "years").unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot update `age` in fields of ObjectTypeDefinition `User` because it does not exist",
    );
}

/// Verifies that an already-built node replaces the element outright.
#[test]
fn update_with_node_replaces() {
    let mut items = user_fields();
    let replacement = build::field_definition_node(json!({
        "name": "email",
        "type": "String!",
        "description": "Primary address",
    })).unwrap();
    fields_crud(&mut items).update("email", replacement.clone()).unwrap();
    assert_eq!(items[2], replacement);
}

/// Verifies that upsert creates an absent element and updates an existing
/// one.
#[test]
fn upsert_creates_or_updates() {
    let mut items = user_fields();
    fields_crud(&mut items).upsert("age: Int").unwrap();
    assert_eq!(names(&items), vec!["id", "name", "email", "age"]);

    fields_crud(&mut items).upsert("age: Int!").unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[3].type_.to_string(), "Int!");
}

/// Verifies that props too partial to build an element still update an
/// existing element they name.
#[test]
fn upsert_partial_props_update_existing() {
    let mut items = user_fields();
    fields_crud(&mut items)
        .upsert(json!({ "name": "name", "description": "Display name" }))
        .unwrap();
    assert_eq!(items[1].description.as_ref().unwrap().value, "Display name");
    assert_eq!(items[1].type_.to_string(), "String");

    let err = fields_crud(&mut items)
        .upsert(json!({ "name": "age", "description": "Years" }))
        .unwrap_err();
    assert!(matches!(
        err,
        AstBuildError::MalformedInput { kind: Some(NodeKind::FieldDefinition), .. },
    ));
}

/// Verifies that remove returns the element and preserves the order of the
/// rest.
#[test]
fn remove_preserves_order() {
    let mut items = user_fields();
    let removed = fields_crud(&mut items).remove("name").unwrap();
    assert_eq!(removed.name.value, "name");
    assert_eq!(removed.kind(), NodeKind::FieldDefinition);
    assert_eq!(names(&items), vec!["id", "email"]);

    let err = fields_crud(&mut items).remove("name").unwrap_err();
    assert!(matches!(err, AstBuildError::NotFound { action: "remove", .. }));
}

#[test]
fn find_mut_edits_in_place() {
    let mut items = user_fields();
    let field = fields_crud(&mut items).find_mut("id").unwrap();
    field.name = build::name_node("uid").unwrap();
    assert_eq!(names(&items), vec!["uid", "name", "email"]);
}
