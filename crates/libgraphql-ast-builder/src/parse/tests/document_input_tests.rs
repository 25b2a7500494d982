//! Tests for flattening mixed document input.

use crate::ast::NodeKinded;
use crate::build;
use crate::parse::normalize_document_input;
use crate::parse::DocumentInput;
use crate::NodeKind;
use serde_json::json;

#[test]
fn text_input() {
    let definitions = normalize_document_input("type User { id: ID! }".into()).unwrap();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].name(), Some("User"));
}

#[test]
fn document_input_is_flattened() {
    let document = build::document_node(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
        { "kind": "EnumTypeDefinition", "name": "Role", "values": ["ADMIN"] },
    ])).unwrap();
    let definitions = normalize_document_input(document.into()).unwrap();
    let names: Vec<_> = definitions.iter().filter_map(|definition| definition.name()).collect();
    assert_eq!(names, vec!["Date", "Role"]);
}

/// Verifies that nested lists of input keep left-to-right order.
#[test]
fn many_inputs_in_order() {
    let document = build::document_node(json!([
        { "kind": "ScalarTypeDefinition", "name": "Date" },
    ])).unwrap();
    let input = DocumentInput::Many(vec![
        DocumentInput::Text("type User { id: ID! }".to_string()),
        DocumentInput::Many(vec![
            DocumentInput::Document(document),
            DocumentInput::Text("   ".to_string()),
        ]),
        DocumentInput::Text("query Viewer { viewer { id } }".to_string()),
    ]);

    let definitions = normalize_document_input(input).unwrap();
    assert_eq!(
        definitions.iter().map(|definition| definition.kind()).collect::<Vec<_>>(),
        vec![
            NodeKind::ObjectTypeDefinition,
            NodeKind::ScalarTypeDefinition,
            NodeKind::OperationDefinition,
        ],
    );
}

#[test]
fn vec_of_text_converts() {
    let input: DocumentInput = vec!["scalar Date", "scalar Time"].into();
    let definitions = normalize_document_input(input).unwrap();
    assert_eq!(definitions.len(), 2);
}

#[test]
fn malformed_part_fails_the_whole_input() {
    let input: DocumentInput = vec!["scalar Date", "scalar {"].into();
    assert!(normalize_document_input(input).is_err());
}
