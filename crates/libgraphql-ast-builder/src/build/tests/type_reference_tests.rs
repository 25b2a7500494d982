//! Tests for type references: string parsing, flag props and the
//! non-null wrapping rules.

use crate::ast::NullableTypeNode;
use crate::ast::TypeNode;
use crate::build;
use crate::build::parse_type_reference;
use crate::AstBuildError;
use serde_json::json;

/// Verifies that nested wrappers parse at every level.
#[test]
fn parses_nested_wrappers() {
    let type_ = parse_type_reference("[ID!]!").unwrap();
    assert!(type_.is_non_null());
    assert!(type_.is_list());
    assert_eq!(type_.typename(), "ID");
    assert_eq!(type_.to_string(), "[ID!]!");

    let nested = parse_type_reference("[[Int]]").unwrap();
    assert!(!nested.is_non_null());
    assert!(!nested.has_non_null());
    assert_eq!(nested.to_string(), "[[Int]]");
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(parse_type_reference("  User ").unwrap().to_string(), "User");
}

/// Verifies that malformed references fail with the reference quoted.
#[test]
fn rejects_malformed_references() {
    for src in ["", "User!!", "User$", "[User", "User = 1"] {
        let err = parse_type_reference(src).unwrap_err();
        match err {
            AstBuildError::MalformedInput { kind: None, reason } => {
                assert!(
                    reason.starts_with(&format!("invalid type reference `{src}`")),
                    "unexpected reason for `{src}`: {reason}",
                );
            },
            other => panic!("expected MalformedInput for `{src}`, got: {other:?}"),
        }
    }
}

/// Verifies the `{ named, list, nonNull }` flag form.
#[test]
fn type_from_flags() {
    let cases = [
        (json!({ "named": "User" }), "User"),
        (json!({ "named": "User", "list": true }), "[User]"),
        (json!({ "named": "User", "nonNull": true }), "User!"),
        (json!({ "named": "User", "list": true, "nonNull": true }), "[User!]!"),
    ];
    for (props, expected) in cases {
        assert_eq!(build::type_node(props).unwrap().to_string(), expected);
    }
}

/// Verifies that wrapping a non-null type in non-null collapses to a
/// single wrapper.
#[test]
fn non_null_of_non_null_collapses() {
    let non_null = build::non_null_type_node("ID!").unwrap();
    assert!(matches!(non_null.type_, NullableTypeNode::Named(ref named) if named.name.value == "ID"));
    assert_eq!(TypeNode::NonNull(non_null).to_string(), "ID!");

    let twice = parse_type_reference("ID!").unwrap().into_non_null();
    assert_eq!(twice.to_string(), "ID!");
}

#[test]
fn list_type_shorthand() {
    let list = build::list_type_node("User!").unwrap();
    assert_eq!(TypeNode::List(list).to_string(), "[User!]");
}

/// Verifies the structural queries on type references.
#[test]
fn type_queries() {
    let type_ = parse_type_reference("[User!]").unwrap();
    assert!(type_.is_list());
    assert!(!type_.is_non_null());
    assert!(type_.has_non_null());
    assert_eq!(type_.nullable().to_string(), "[User!]");

    let non_null = parse_type_reference("User!").unwrap();
    assert_eq!(non_null.nullable().to_string(), "User");
    assert_eq!(non_null.clone().into_list().to_string(), "[User!]");
}

#[test]
fn type_from_tagged_props() {
    let type_ = build::type_node(json!({
        "kind": "NonNullType",
        "type": { "kind": "NamedType", "name": "User" },
    })).unwrap();
    assert_eq!(type_.to_string(), "User!");
    assert!(build::type_node(json!(5)).is_err());
}
