//! Tests for lowering GraphQL text into canonical nodes.

use crate::ast::DefinitionNode;
use crate::ast::ExecutableDefinitionNode;
use crate::ast::NodeKinded;
use crate::ast::OperationType;
use crate::ast::SelectionNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::ast::ValueNode;
use crate::parse::parse_text;
use crate::AstBuildError;
use crate::NodeKind;

fn kinds(definitions: &[DefinitionNode]) -> Vec<NodeKind> {
    definitions.iter().map(|definition| definition.kind()).collect()
}

#[test]
fn schema_text() {
    let definitions = parse_text(r#"
        schema { query: Query }

        "A person"
        type User implements Node @key(fields: "id") {
          id: ID!
          friends(first: Int = 10): [User!]!
        }

        enum Role { ADMIN USER }

        directive @auth(role: Role) repeatable on FIELD_DEFINITION | OBJECT
    "#).unwrap();

    assert_eq!(
        kinds(&definitions),
        vec![
            NodeKind::SchemaDefinition,
            NodeKind::ObjectTypeDefinition,
            NodeKind::EnumTypeDefinition,
            NodeKind::DirectiveDefinition,
        ],
    );

    let user = match &definitions[1] {
        DefinitionNode::TypeSystem(TypeSystemDefinitionNode::Type(TypeDefinitionNode::Object(user))) => user,
        other => panic!("expected an object type, found {other:?}"),
    };
    assert_eq!(user.description.as_ref().unwrap().value, "A person");
    assert_eq!(user.interfaces[0].name.value, "Node");
    assert_eq!(user.directives[0].name.value, "key");
    assert_eq!(user.fields[1].type_.to_string(), "[User!]!");
    assert!(matches!(
        &user.fields[1].arguments[0].default_value,
        Some(ValueNode::Int(int)) if int.value == "10",
    ));

    let directive_def = definitions[3].as_directive_definition().unwrap();
    assert!(directive_def.repeatable);
    let locations: Vec<_> = directive_def.locations.iter().map(|l| l.as_str()).collect();
    assert_eq!(locations, vec!["FIELD_DEFINITION", "OBJECT"]);
}

#[test]
fn schema_definition_operation_types() {
    let definitions = parse_text("schema { query: RootQuery mutation: RootMutation }").unwrap();
    let schema = definitions[0].as_schema_definition().unwrap();
    let operations: Vec<_> = schema.operation_types.iter()
        .map(|op_type| (op_type.operation, op_type.type_.name.as_str()))
        .collect();
    assert_eq!(
        operations,
        vec![
            (OperationType::Query, "RootQuery"),
            (OperationType::Mutation, "RootMutation"),
        ],
    );
}

#[test]
fn type_extensions() {
    let definitions = parse_text(r#"
        extend type User { age: Int }
        extend enum Role { GUEST }
    "#).unwrap();
    assert_eq!(
        kinds(&definitions),
        vec![NodeKind::ObjectTypeExtension, NodeKind::EnumTypeExtension],
    );
    assert_eq!(definitions[0].name(), Some("User"));
}

/// Verifies that text the schema grammar rejects is read as an executable
/// document.
#[test]
fn executable_text() {
    let definitions = parse_text(r#"
        query GetUser($id: ID!, $first: Int = 5) {
          user(id: $id) {
            id
            ...UserParts
            ... on Admin { level }
          }
        }

        fragment UserParts on User { name }
    "#).unwrap();

    assert_eq!(
        kinds(&definitions),
        vec![NodeKind::OperationDefinition, NodeKind::FragmentDefinition],
    );

    let op = definitions[0].as_operation().unwrap();
    assert_eq!(op.operation, OperationType::Query);
    assert_eq!(op.variable_definitions.len(), 2);
    assert_eq!(op.variable_definitions[0].variable.name.value, "id");
    assert_eq!(op.variable_definitions[0].type_.to_string(), "ID!");

    let user = match &op.selection_set.selections[0] {
        SelectionNode::Field(user) => user,
        other => panic!("expected a field, found {other:?}"),
    };
    assert!(matches!(&user.arguments[0].value, ValueNode::Variable(var) if var.name.value == "id"));
    let selections = &user.selection_set.as_ref().unwrap().selections;
    assert_eq!(
        selections.iter().map(|selection| selection.kind()).collect::<Vec<_>>(),
        vec![NodeKind::Field, NodeKind::FragmentSpread, NodeKind::InlineFragment],
    );

    let frag = definitions[1].as_fragment().unwrap();
    assert_eq!(frag.type_condition.name.value, "User");
}

/// Verifies that leaf fields carry no selection set at all.
#[test]
fn leaf_fields_have_no_selection_set() {
    let definitions = parse_text("{ viewer { id } }").unwrap();
    let op = definitions[0].as_operation().unwrap();
    let viewer = match &op.selection_set.selections[0] {
        SelectionNode::Field(viewer) => viewer,
        other => panic!("expected a field, found {other:?}"),
    };
    assert!(viewer.selection_set.is_some());
    match &viewer.selection_set.as_ref().unwrap().selections[0] {
        SelectionNode::Field(id) => assert!(id.selection_set.is_none()),
        other => panic!("expected a field, found {other:?}"),
    }
}

#[test]
fn anonymous_shorthand_is_a_query() {
    let definitions = parse_text("{ viewer { id } }").unwrap();
    assert!(matches!(
        &definitions[0],
        DefinitionNode::Executable(ExecutableDefinitionNode::Operation(op))
            if op.operation == OperationType::Query && op.name.is_none(),
    ));
}

#[test]
fn mutation_and_subscription() {
    let definitions = parse_text(r#"
        mutation Rename { rename(name: "x") }
        subscription OnEvent { event }
    "#).unwrap();
    let operations: Vec<_> = definitions.iter()
        .filter_map(DefinitionNode::as_operation)
        .map(|op| op.operation)
        .collect();
    assert_eq!(operations, vec![OperationType::Mutation, OperationType::Subscription]);
}

#[test]
fn whitespace_only_text_is_empty() {
    assert!(parse_text("").unwrap().is_empty());
    assert!(parse_text("  \n\t ").unwrap().is_empty());
}

/// Verifies that text neither grammar accepts reports both failures.
#[test]
fn malformed_text() {
    let err = parse_text("type User {").unwrap_err();
    match err {
        AstBuildError::MalformedInput { kind, reason } => {
            assert_eq!(kind, None);
            assert!(reason.starts_with("not a schema document ("));
            assert!(reason.contains(") nor an executable document ("));
        },
        other => panic!("expected malformed input, found {other:?}"),
    }
}

/// Verifies that type system and executable definitions may share one text,
/// and keep their source order.
#[test]
fn mixed_text_keeps_source_order() {
    let definitions = parse_text(r#"
        "A user"
        type User { id: ID! }

        query Viewer { viewer { id } }

        enum Role { ADMIN }

        fragment UserParts on User { id }
    "#).unwrap();

    assert_eq!(
        kinds(&definitions),
        vec![
            NodeKind::ObjectTypeDefinition,
            NodeKind::OperationDefinition,
            NodeKind::EnumTypeDefinition,
            NodeKind::FragmentDefinition,
        ],
    );
    let names: Vec<_> = definitions.iter().map(|definition| definition.name()).collect();
    assert_eq!(names, vec![Some("User"), Some("Viewer"), Some("Role"), Some("UserParts")]);

    let user = match &definitions[0] {
        DefinitionNode::TypeSystem(TypeSystemDefinitionNode::Type(
            TypeDefinitionNode::Object(user),
        )) => user,
        other => panic!("expected an object type, found {other:?}"),
    };
    assert_eq!(user.description.as_ref().unwrap().value, "A user");
}

/// Verifies that a definition keyword used as a name does not split its
/// definition apart.
#[test]
fn mixed_text_with_keyword_names() {
    let definitions = parse_text("type query { a: Int }\nquery Q { a }").unwrap();
    assert_eq!(
        kinds(&definitions),
        vec![NodeKind::ObjectTypeDefinition, NodeKind::OperationDefinition],
    );
    assert_eq!(definitions[0].name(), Some("query"));
    assert_eq!(definitions[1].name(), Some("Q"));
}

#[test]
fn mixed_text_with_a_broken_definition() {
    let err = parse_text("type A { id: ID }\nquery Q { a\nenum E { X }").unwrap_err();
    assert!(matches!(
        err,
        AstBuildError::MalformedInput { kind: None, ref reason }
            if reason.starts_with("not a schema document ("),
    ));
}
