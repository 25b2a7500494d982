//! Tests for the canonical JSON shape of nodes and for deserializing
//! through the node factory.

use crate::ast::FieldDefinitionNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::SelectionNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::ValueNode;
use crate::build;
use serde_json::json;

/// Verifies the tagged camelCase layout, with absent optional fields
/// omitted entirely.
#[test]
fn field_definition_shape() {
    let field = build::field_definition_node("friends: [User!]").unwrap();
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({
            "kind": "FieldDefinition",
            "name": { "kind": "Name", "value": "friends" },
            "arguments": [],
            "type": {
                "kind": "ListType",
                "type": {
                    "kind": "NonNullType",
                    "type": {
                        "kind": "NamedType",
                        "name": { "kind": "Name", "value": "User" },
                    },
                },
            },
            "directives": [],
        }),
    );
}

#[test]
fn field_selection_shape() {
    let field = build::field_node(json!({ "name": "user", "alias": "me" })).unwrap();
    assert_eq!(
        serde_json::to_value(SelectionNode::Field(field)).unwrap(),
        json!({
            "kind": "Field",
            "alias": { "kind": "Name", "value": "me" },
            "name": { "kind": "Name", "value": "user" },
            "arguments": [],
            "directives": [],
        }),
    );
}

#[test]
fn value_shapes() {
    assert_eq!(
        serde_json::to_value(build::value_node(json!(null)).unwrap()).unwrap(),
        json!({ "kind": "NullValue" }),
    );
    assert_eq!(
        serde_json::to_value(build::value_node(json!(3)).unwrap()).unwrap(),
        json!({ "kind": "IntValue", "value": "3" }),
    );
    assert_eq!(
        serde_json::to_value(build::value_node(json!("hi")).unwrap()).unwrap(),
        json!({ "kind": "StringValue", "value": "hi" }),
    );
}

/// Verifies that deserializing accepts shorthand props as well as the
/// canonical shape.
#[test]
fn deserialize_runs_the_factory() {
    let field: FieldDefinitionNode = serde_json::from_value(json!("id: ID!")).unwrap();
    assert_eq!(field.name.value, "id");
    assert_eq!(field.type_.to_string(), "ID!");

    let object: ObjectTypeDefinitionNode = serde_json::from_value(json!({
        "name": "User",
        "fields": ["id: ID!", "name"],
    })).unwrap();
    assert_eq!(object.fields.len(), 2);
    assert_eq!(object.fields[1].type_.to_string(), "String");
}

#[test]
fn deserialize_union_by_kind_tag() {
    let type_def: TypeDefinitionNode = serde_json::from_value(json!({
        "kind": "UnionTypeDefinition",
        "name": "SearchResult",
        "types": ["User", "Post"],
    })).unwrap();
    assert!(matches!(type_def, TypeDefinitionNode::Union(ref union) if union.types.len() == 2));

    let err = serde_json::from_value::<TypeDefinitionNode>(json!({
        "kind": "Nope",
        "name": "X",
    })).unwrap_err();
    assert!(err.to_string().contains("unknown node kind `Nope`"));
}

/// Verifies that serialized output is accepted back as props and yields an
/// equal node.
#[test]
fn canonical_json_is_accepted_as_props() {
    let object = build::object_type_definition_node(json!({
        "name": "User",
        "description": "A person",
        "interfaces": ["Node"],
        "fields": [
            { "name": "id", "type": "ID!", "directives": ["external"] },
            { "name": "posts", "type": "[Post!]!", "arguments": ["first: Int"] },
        ],
    })).unwrap();
    let canonical = serde_json::to_value(&object).unwrap();
    let rebuilt = build::object_type_definition_node(canonical).unwrap();
    assert_eq!(rebuilt, object);

    let value = build::value_node(json!({ "a": [1, 2.5, true, null], "b": { "c": "d" } })).unwrap();
    let rebuilt: ValueNode = serde_json::from_value(serde_json::to_value(&value).unwrap()).unwrap();
    assert_eq!(rebuilt, value);
}
