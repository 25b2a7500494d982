//! Tests for printing canonical documents as GraphQL text.

use crate::ast::DocumentNode;
use crate::build;
use crate::parse::parse_text;
use crate::print::print_document;
use crate::print::to_graphql_parser_document;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::json;

fn document(definitions: serde_json::Value) -> DocumentNode {
    build::document_node(definitions).unwrap()
}

fn reparsed(src: &str) -> DocumentNode {
    DocumentNode {
        definitions: parse_text(src).unwrap(),
    }
}

#[test]
fn prints_type_definitions() {
    let printed = print_document(&document(json!([{
        "kind": "ObjectTypeDefinition",
        "name": "User",
        "fields": ["id: ID!", "friends: [User!]!"],
    }]))).unwrap();

    assert!(printed.contains("type User {"));
    assert!(printed.contains("id: ID!"));
    assert!(printed.contains("friends: [User!]!"));
}

/// Verifies that type-system definitions print before operations whatever
/// their order in the document.
#[test]
fn schema_part_prints_first() {
    let printed = print_document(&document(json!([
        { "kind": "OperationDefinition", "name": "Viewer", "selections": ["id"] },
        { "kind": "ScalarTypeDefinition", "name": "Date" },
    ]))).unwrap();

    let scalar = printed.find("scalar Date").unwrap();
    let query = printed.find("query Viewer").unwrap();
    assert!(scalar < query);
}

#[test]
fn anonymous_query_prints_as_shorthand() {
    let printed = print_document(&document(json!([
        { "kind": "OperationDefinition", "selections": ["id"] },
    ]))).unwrap();
    assert!(printed.trim_start().starts_with('{'));
    assert!(!printed.contains("query"));
}

#[test]
fn anonymous_mutation_keeps_keyword() {
    let printed = print_document(&document(json!([
        { "kind": "OperationDefinition", "operation": "mutation", "selections": ["reset"] },
    ]))).unwrap();
    assert!(printed.contains("mutation"));
}

#[test]
fn empty_document_prints_nothing() {
    assert_eq!(print_document(&DocumentNode::default()).unwrap(), "");
}

#[test]
fn schema_extension_cannot_be_printed() {
    let err = print_document(&document(json!([
        { "kind": "SchemaExtension", "directives": ["tagged"] },
    ]))).unwrap_err();
    assert_eq!(
        err,
        AstBuildError::MalformedInput {
            kind: Some(NodeKind::SchemaExtension),
            reason: "schema extensions cannot be printed".to_string(),
        },
    );
}

/// Verifies that integers beyond 32 bits are rejected instead of being
/// truncated.
#[test]
fn int_overflow_fails() {
    let err = print_document(&document(json!([{
        "kind": "OperationDefinition",
        "selections": [{ "name": "users", "arguments": [{ "name": "first", "value": 3_000_000_000_i64 }] }],
    }]))).unwrap_err();
    assert!(matches!(
        err,
        AstBuildError::MalformedInput { kind: Some(NodeKind::IntValue), .. },
    ));
}

#[test]
fn split_by_grammar() {
    let documents = to_graphql_parser_document(&document(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
        { "kind": "FragmentDefinition", "name": "UserParts", "typeCondition": "User", "selections": ["id"] },
        { "kind": "EnumTypeDefinition", "name": "Role", "values": ["ADMIN"] },
    ]))).unwrap();
    assert_eq!(documents.schema.definitions.len(), 2);
    assert_eq!(documents.operation.definitions.len(), 1);
}

/// Verifies that printed schema text parses back into the same nodes.
#[test]
fn schema_round_trip() {
    let src = r#"
        schema { query: Query mutation: Mutation }

        "A person"
        type User implements Node @key(fields: "id") {
          id: ID!
          friends(first: Int = 10, roles: [Role!] = [ADMIN]): [User!]!
        }

        interface Node { id: ID! }

        union SearchResult = User | Post

        enum Role { ADMIN USER }

        input UserFilter { nameContains: String limit: Int = 20 }

        scalar Date

        directive @auth(role: Role) repeatable on FIELD_DEFINITION | OBJECT

        extend type User { age: Int }
    "#;
    let original = reparsed(src);
    let printed = print_document(&original).unwrap();
    assert_eq!(reparsed(&printed), original);
}

#[test]
fn executable_round_trip() {
    let src = r#"
        query GetUser($id: ID!, $first: Int = 5) @cached {
          user(id: $id) {
            id
            handle: name
            ...UserParts
            ... on Admin { level }
          }
        }

        mutation Rename($name: String!) { rename(name: $name, dryRun: true) }

        fragment UserParts on User { email }
    "#;
    let original = reparsed(src);
    let printed = print_document(&original).unwrap();
    assert_eq!(reparsed(&printed), original);
}
