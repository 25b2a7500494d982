//! Tests for the type definition wrappers: narrowing and the per-kind
//! shortcuts.

use crate::api::FieldDefinitionApi;
use crate::api::InputValueDefinitionApi;
use crate::api::TypeDefinitionApi;
use crate::ast::TypeDefinitionNode;
use crate::build;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::json;

fn type_def(props: serde_json::Value) -> TypeDefinitionNode {
    build::type_definition_node(props).unwrap()
}

#[test]
fn narrowing_checks_and_converts() {
    let mut union = type_def(json!({
        "kind": "UnionTypeDefinition",
        "name": "SearchResult",
        "types": ["User"],
    }));

    let api = TypeDefinitionApi::new(&mut union);
    assert!(api.is_union_type());
    assert!(!api.is_object_type());
    assert_eq!(api.kind(), NodeKind::UnionTypeDefinition);

    let mut union_api = api.into_union_type().unwrap();
    union_api.members().create("Post").unwrap();
    assert_eq!(union_api.members().names(), vec!["User", "Post"]);
}

/// Verifies that narrowing to the wrong kind reports both kinds.
#[test]
fn narrowing_to_wrong_kind() {
    let mut scalar = type_def(json!({ "kind": "ScalarTypeDefinition", "name": "Date" }));
    let err = TypeDefinitionApi::new(&mut scalar).into_enum_type().err().unwrap();
    assert_eq!(
        err,
        AstBuildError::KindMismatch {
            expected: NodeKind::EnumTypeDefinition,
            actual: NodeKind::ScalarTypeDefinition,
        },
    );
}

#[test]
fn shared_capabilities_before_narrowing() {
    let mut object = type_def(json!({ "kind": "ObjectTypeDefinition", "name": "User" }));
    let mut api = TypeDefinitionApi::new(&mut object);
    api.name().set("Person").unwrap();
    api.description().set(Some("Someone"));
    api.directives().create("key").unwrap();
    assert!(api.kind_assertion().assert_kind(NodeKind::ObjectTypeDefinition).is_ok());

    let object = match object {
        TypeDefinitionNode::Object(object) => object,
        other => panic!("expected an object type, found {other:?}"),
    };
    assert_eq!(object.name.value, "Person");
    assert_eq!(object.description.unwrap().value, "Someone");
    assert_eq!(object.directives.len(), 1);
}

#[test]
fn object_field_shortcuts() {
    let mut object = build::object_type_definition_node(json!({
        "name": "User",
        "fields": ["id: ID!"],
    })).unwrap();
    let mut api = crate::api::ObjectTypeApi::new(&mut object);
    api.upsert_field("name").unwrap();
    api.upsert_field("id: String").unwrap();
    api.interfaces().create("Node").unwrap();

    assert_eq!(api.field_names(), vec!["id", "name"]);
    assert_eq!(api.node().fields[0].type_.to_string(), "String");

    let removed = api.remove_field("name").unwrap();
    assert_eq!(removed.name.value, "name");
    assert!(api.field("name").is_err());
}

/// Verifies the field wrapper's capabilities reach the node inside its
/// parent.
#[test]
fn field_wrapper_edits_parent() {
    let mut object = build::object_type_definition_node(json!({
        "name": "User",
        "fields": ["friends: [User]"],
    })).unwrap();
    let mut api = crate::api::ObjectTypeApi::new(&mut object);
    {
        let mut friends: FieldDefinitionApi<'_> = api.field("friends").unwrap();
        friends.type_ref().set_non_null(true);
        friends.arguments().create("first: Int").unwrap();
        friends.description().set(Some("Known people"));
    }
    let friends = &object.fields[0];
    assert_eq!(friends.type_.to_string(), "[User]!");
    assert_eq!(friends.arguments.len(), 1);
    assert_eq!(friends.description.as_ref().unwrap().value, "Known people");
}

#[test]
fn enum_and_scalar_wrappers() {
    let mut role = build::enum_type_definition_node(json!({
        "name": "Role",
        "values": ["ADMIN"],
    })).unwrap();
    crate::api::EnumTypeApi::new(&mut role).values().create("GUEST").unwrap();
    assert_eq!(role.values.len(), 2);

    let mut date = build::scalar_type_definition_node("Date").unwrap();
    crate::api::ScalarTypeApi::new(&mut date)
        .directives()
        .create(json!({ "name": "specifiedBy", "arguments": [{ "name": "url", "value": "https://example.com" }] }))
        .unwrap();
    assert_eq!(date.directives[0].arguments[0].name.value, "url");
}

/// Verifies that an input field converts into an output field definition
/// without its default value.
#[test]
fn input_fields_and_conversion() {
    let mut filter = build::input_object_type_definition_node(json!({
        "name": "UserFilter",
        "fields": [{ "name": "limit", "type": "Int", "defaultValue": 20 }],
    })).unwrap();
    let mut api = crate::api::InputTypeApi::new(&mut filter);
    api.create_field("nameContains").unwrap();
    assert_eq!(api.field_names(), vec!["limit", "nameContains"]);

    let mut limit: InputValueDefinitionApi<'_> = api.field("limit").unwrap();
    assert!(limit.default_value().has());
    let as_field = limit.to_field_definition();
    assert_eq!(as_field.name.value, "limit");
    assert_eq!(as_field.type_.to_string(), "Int");
    assert!(as_field.arguments.is_empty());
}
