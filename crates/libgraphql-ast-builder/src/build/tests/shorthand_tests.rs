//! Tests for the node constructors: shorthand lowering, nested props,
//! already-built nodes and canonical JSON input.

use crate::ast::DefinitionNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::NodeKinded;
use crate::ast::OperationType;
use crate::ast::SelectionNode;
use crate::ast::TypeNode;
use crate::ast::ValueNode;
use crate::build;
use crate::build::Props;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::json;

fn named(name: &str) -> NamedTypeNode {
    NamedTypeNode {
        name: NameNode {
            value: name.to_string(),
        },
    }
}

/// Verifies that a bare string builds a name node.
#[test]
fn name_from_string() {
    let name = build::name_node("id").unwrap();
    assert_eq!(name.value, "id");
    assert_eq!(build::name_node(json!({ "value": "id" })).unwrap(), name);
}

/// Verifies that a name cannot be built from a non-string primitive.
#[test]
fn name_from_number_fails() {
    let err = build::name_node(json!(7)).unwrap_err();
    assert!(matches!(
        err,
        AstBuildError::MalformedInput { kind: Some(NodeKind::Name), .. },
    ));
}

/// Verifies that a leading `$` is dropped from variable shorthand.
#[test]
fn variable_strips_dollar() {
    assert_eq!(build::variable_node("$id").unwrap().name.value, "id");
    assert_eq!(build::variable_node("id").unwrap().name.value, "id");
}

/// Verifies that `"name: Type"` builds a typed field definition.
#[test]
fn field_definition_from_typed_name() {
    let field = build::field_definition_node("id: ID!").unwrap();
    assert_eq!(field.name.value, "id");
    assert_eq!(field.type_, TypeNode::Named(named("ID")).into_non_null());
    assert!(field.arguments.is_empty());
    assert!(field.description.is_none());
}

/// Verifies that a bare field name defaults to the `String` type.
#[test]
fn field_definition_from_bare_name_is_string() {
    let field = build::field_definition_node("nickname").unwrap();
    assert_eq!(field.type_, TypeNode::Named(named("String")));

    let input = build::input_value_definition_node("filter").unwrap();
    assert_eq!(input.type_, TypeNode::Named(named("String")));
}

/// Verifies that nested props are normalized through their own
/// constructors.
#[test]
fn field_definition_with_nested_arguments() {
    let field = build::field_definition_node(json!({
        "name": "users",
        "type": "[User!]!",
        "description": "All users",
        "arguments": ["limit: Int", { "name": "offset", "type": "Int", "defaultValue": 0 }],
        "directives": ["deprecated"],
    })).unwrap();

    assert_eq!(field.type_.to_string(), "[User!]!");
    assert_eq!(field.description.unwrap().value, "All users");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[0].name.value, "limit");
    assert_eq!(
        field.arguments[1].default_value,
        Some(ValueNode::Int(build::int_value_node(0).unwrap())),
    );
    assert_eq!(field.directives[0].name.value, "deprecated");
}

/// Verifies that a variable definition needs an explicit type.
#[test]
fn variable_definition_shorthand() {
    let var_def = build::variable_definition_node("$id: ID!").unwrap();
    assert_eq!(var_def.variable.name.value, "id");
    assert_eq!(var_def.type_.to_string(), "ID!");
    assert!(var_def.directives.is_empty());

    let err = build::variable_definition_node("id").unwrap_err();
    assert!(matches!(
        err,
        AstBuildError::MalformedInput { kind: Some(NodeKind::VariableDefinition), .. },
    ));
}

/// Verifies that operation type definitions default to the conventional
/// root type name.
#[test]
fn operation_type_definition_shorthand() {
    let query = build::operation_type_definition_node("query").unwrap();
    assert_eq!(query.operation, OperationType::Query);
    assert_eq!(query.type_.name.value, "Query");

    let mutation = build::operation_type_definition_node("mutation: RootMutation").unwrap();
    assert_eq!(mutation.operation, OperationType::Mutation);
    assert_eq!(mutation.type_.name.value, "RootMutation");

    let subscription = build::operation_type_definition_node(json!({
        "operation": "subscription",
    })).unwrap();
    assert_eq!(subscription.type_.name.value, "Subscription");

    assert!(build::operation_type_definition_node("fetch").is_err());
}

/// Verifies that collections accept shorthand elements.
#[test]
fn type_definitions_with_collections() {
    let object = build::object_type_definition_node(json!({
        "name": "User",
        "interfaces": ["Node"],
        "fields": ["id: ID!", "name"],
    })).unwrap();
    assert_eq!(object.interfaces, vec![named("Node")]);
    assert_eq!(object.fields.len(), 2);

    let union = build::union_type_definition_node(json!({
        "name": "SearchResult",
        "types": ["User", "Post"],
    })).unwrap();
    assert_eq!(union.types, vec![named("User"), named("Post")]);

    let enum_ = build::enum_type_definition_node(json!({
        "name": "Role",
        "values": ["ADMIN", "USER"],
    })).unwrap();
    let values: Vec<_> = enum_.values.iter().map(|value| value.name.value.as_str()).collect();
    assert_eq!(values, vec!["ADMIN", "USER"]);
}

/// Verifies that a single non-array collection value is lifted into a
/// one-element collection.
#[test]
fn single_collection_value_is_lifted() {
    let object = build::object_type_definition_node(json!({
        "name": "User",
        "fields": "id: ID!",
    })).unwrap();
    assert_eq!(object.fields.len(), 1);
}

/// Verifies that directive arguments accept value shorthand.
#[test]
fn directive_with_arguments() {
    let directive = build::directive_node(json!({
        "name": "deprecated",
        "arguments": [{ "name": "reason", "value": "old" }],
    })).unwrap();
    assert_eq!(directive.arguments.len(), 1);
    assert!(matches!(&directive.arguments[0].value, ValueNode::String(s) if s.value == "old"));
}

/// Verifies that directive definitions read locations as names.
#[test]
fn directive_definition_props() {
    let directive_def = build::directive_definition_node(json!({
        "name": "auth",
        "arguments": ["role: String"],
        "repeatable": true,
        "locations": ["FIELD_DEFINITION", "OBJECT"],
    })).unwrap();
    assert!(directive_def.repeatable);
    assert_eq!(directive_def.locations[1].value, "OBJECT");

    let bare = build::directive_definition_node("auth").unwrap();
    assert!(!bare.repeatable);
    assert!(bare.locations.is_empty());
}

/// Verifies that an already-built node is returned unchanged.
#[test]
fn built_node_is_returned_as_is() {
    let field = build::field_definition_node("id: ID!").unwrap();
    assert_eq!(build::field_definition_node(field.clone()).unwrap(), field);
    assert_eq!(build::field_definition_node(Props::Node(field.clone())).unwrap(), field);
}

/// Verifies that the canonical JSON of a node rebuilds the same node.
#[test]
fn canonical_json_rebuilds_same_node() {
    let object = build::object_type_definition_node(json!({
        "name": "User",
        "description": "A user",
        "interfaces": ["Node"],
        "directives": [{ "name": "key", "arguments": [{ "name": "fields", "value": "id" }] }],
        "fields": [
            "id: ID!",
            { "name": "friends", "type": "[User!]", "arguments": ["first: Int = 10"] },
        ],
    }));
    // `first: Int = 10` is not a type reference.
    assert!(object.is_err());

    let object = build::object_type_definition_node(json!({
        "name": "User",
        "description": "A user",
        "interfaces": ["Node"],
        "directives": [{ "name": "key", "arguments": [{ "name": "fields", "value": "id" }] }],
        "fields": [
            "id: ID!",
            {
                "name": "friends",
                "type": "[User!]",
                "arguments": [{ "name": "first", "type": "Int", "defaultValue": 10 }],
            },
        ],
    })).unwrap();

    let canonical = serde_json::to_value(&object).unwrap();
    assert_eq!(canonical["kind"], "ObjectTypeDefinition");
    assert_eq!(canonical["fields"][1]["type"]["kind"], "ListType");
    assert_eq!(build::object_type_definition_node(canonical).unwrap(), object);
}

/// Verifies that a `kind` tag naming another kind is rejected.
#[test]
fn mismatched_kind_tag_fails() {
    let err = build::named_type_node(json!({ "kind": "Name", "value": "User" })).unwrap_err();
    assert_eq!(
        err,
        AstBuildError::KindMismatch {
            expected: NodeKind::NamedType,
            actual: NodeKind::Name,
        },
    );
}

/// Verifies that a `kind` tag naming no kind at all is rejected.
#[test]
fn unknown_kind_tag_fails() {
    let err = build::named_type_node(json!({ "kind": "Nope", "name": "User" })).unwrap_err();
    assert_eq!(
        err,
        AstBuildError::UnknownKind {
            kind: "Nope".to_string(),
            table: "NamedType",
        },
    );
}

/// Verifies that a missing required field is reported with its kind.
#[test]
fn missing_required_field_fails() {
    let err = build::field_definition_node(json!({ "name": "id" })).unwrap_err();
    assert_eq!(
        err,
        AstBuildError::MalformedInput {
            kind: Some(NodeKind::FieldDefinition),
            reason: "missing required field `type`".to_string(),
        },
    );
}

/// Verifies that union constructors dispatch on the `kind` tag.
#[test]
fn type_definition_dispatches_on_kind() {
    let scalar = build::type_definition_node(json!({
        "kind": "ScalarTypeDefinition",
        "name": "Date",
    })).unwrap();
    assert_eq!(scalar.kind(), NodeKind::ScalarTypeDefinition);
    assert_eq!(scalar.context(), "ScalarTypeDefinition `Date`");

    let err = build::type_definition_node(json!({ "name": "Date" })).unwrap_err();
    assert!(matches!(err, AstBuildError::MalformedInput { kind: None, .. }));

    let err = build::type_definition_node(json!({ "kind": "ObjectTypeExtension", "name": "X" }))
        .unwrap_err();
    assert_eq!(
        err,
        AstBuildError::UnknownKind {
            kind: "ObjectTypeExtension".to_string(),
            table: "TypeDefinition",
        },
    );
}

/// Verifies that bare strings and kind-less objects build fields, while
/// tagged objects dispatch.
#[test]
fn selection_shorthand() {
    let field = build::selection_node("id").unwrap();
    assert!(matches!(field, SelectionNode::Field(ref f) if f.name.value == "id"));

    let nested = build::selection_node(json!({
        "name": "user",
        "alias": "viewer",
        "selections": ["id", { "kind": "FragmentSpread", "name": "UserParts" }],
    })).unwrap();
    let nested = nested.as_field().unwrap();
    assert_eq!(nested.response_name(), "viewer");
    let selections = &nested.selection_set.as_ref().unwrap().selections;
    assert!(matches!(&selections[1], SelectionNode::FragmentSpread(s) if s.name.value == "UserParts"));

    let leaf = build::field_node("id").unwrap();
    assert!(leaf.selection_set.is_none());
}

/// Verifies that operations default to `query` and take `selections` over
/// `selectionSet`.
#[test]
fn operation_definition_defaults() {
    let op = build::operation_definition_node(json!({
        "name": "GetUser",
        "variableDefinitions": ["$id: ID!"],
        "selections": ["viewer"],
        "selectionSet": { "selections": ["ignored"] },
    })).unwrap();
    assert_eq!(op.operation, OperationType::Query);
    assert_eq!(op.name.unwrap().value, "GetUser");
    assert_eq!(op.variable_definitions.len(), 1);
    assert_eq!(op.selection_set.selections.len(), 1);
    assert_eq!(op.selection_set.selections[0].as_field().unwrap().name.value, "viewer");

    let mutation = build::operation_definition_node(json!({ "operation": "mutation" })).unwrap();
    assert_eq!(mutation.operation, OperationType::Mutation);
    assert!(mutation.name.is_none());
    assert!(mutation.selection_set.selections.is_empty());
}

#[test]
fn inline_fragment_from_type_condition() {
    let inline = build::inline_fragment_node("User").unwrap();
    assert_eq!(inline.type_condition, Some(named("User")));
    assert!(build::inline_fragment_node(json!(1)).is_err());
}

/// Verifies that root type aliases default their name.
#[test]
fn root_type_aliases() {
    let query = build::query_type(json!({ "fields": ["viewer: User"] })).unwrap();
    assert_eq!(query.name.value, "Query");
    assert_eq!(query.fields.len(), 1);

    assert_eq!(build::mutation_type(json!(null)).unwrap().name.value, "Mutation");
    assert_eq!(build::subscription_type(json!({})).unwrap().name.value, "Subscription");
    assert_eq!(build::query_type("RootQuery").unwrap().name.value, "RootQuery");
}

#[test]
fn builtin_scalar_aliases() {
    assert_eq!(build::id(), named("ID"));
    assert_eq!(build::int(), named("Int"));
    assert_eq!(build::float(), named("Float"));
    assert_eq!(build::boolean(), named("Boolean"));
    assert_eq!(build::string(), named("String"));
}

/// Verifies that a document built from a list of tagged definitions keeps
/// their order.
#[test]
fn document_from_definition_list() {
    let document = build::document_node(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
        { "kind": "ObjectTypeExtension", "name": "User", "fields": ["born: Date"] },
        { "kind": "FragmentDefinition", "name": "UserParts", "typeCondition": "User" },
    ])).unwrap();
    let names: Vec<_> = document.definitions.iter().map(DefinitionNode::name).collect();
    assert_eq!(names, vec![Some("Date"), Some("User"), Some("UserParts")]);
    assert!(document.definitions[2].is_executable());
}
