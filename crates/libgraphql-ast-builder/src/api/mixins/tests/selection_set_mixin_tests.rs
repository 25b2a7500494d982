//! Tests for the selection capability on operations and fields.

use crate::api::mixins::SelectionSetMixin;
use crate::ast::NodeKinded;
use crate::ast::SelectionNode;
use crate::build;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::json;

/// Verifies that fields are keyed by response name.
#[test]
fn fields_keyed_by_response_name() {
    let mut op = build::operation_definition_node("Viewer").unwrap();
    SelectionSetMixin::new(&mut op)
        .create_field("id")
        .unwrap()
        .create_field(json!({ "name": "user", "alias": "viewer", "selections": ["name"] }))
        .unwrap();

    let selections = SelectionSetMixin::new(&mut op);
    assert_eq!(selections.field_names(), vec!["id", "viewer"]);
    assert!(selections.has_field("viewer"));
    assert!(!selections.has_field("user"));
    assert_eq!(selections.get_field("viewer").unwrap().name.value, "user");
}

#[test]
fn duplicate_response_name_conflicts() {
    let mut op = build::operation_definition_node("Viewer").unwrap();
    SelectionSetMixin::new(&mut op).create_field("id").unwrap();
    let err = SelectionSetMixin::new(&mut op)
        .create_field(json!({ "name": "uid", "alias": "id" }))
        .unwrap_err();
    assert_eq!(
        err,
        AstBuildError::Conflict {
            action: "create",
            collection: "selections",
            name: "id".to_string(),
            parent: "OperationDefinition `Viewer`".to_string(),
        },
    );
}

/// Verifies updates through partial props and bare renames.
#[test]
fn update_field_alias_and_name() {
    let mut op = build::operation_definition_node("Viewer").unwrap();
    SelectionSetMixin::new(&mut op)
        .create_field(json!({ "name": "user", "alias": "viewer" }))
        .unwrap()
        .create_field("id")
        .unwrap();

    SelectionSetMixin::new(&mut op)
        .update_field("viewer", json!({ "alias": "me" }))
        .unwrap()
        .update_field("id", "uid")
        .unwrap();

    assert_eq!(SelectionSetMixin::new(&mut op).field_names(), vec!["me", "uid"]);
}

#[test]
fn upsert_and_remove_field() {
    let mut op = build::operation_definition_node("Viewer").unwrap();
    SelectionSetMixin::new(&mut op).upsert_field("id").unwrap();
    SelectionSetMixin::new(&mut op).upsert_field("id").unwrap();
    assert_eq!(op.selection_set.selections.len(), 1);

    let removed = SelectionSetMixin::new(&mut op).remove_field("id").unwrap();
    assert_eq!(removed.name.value, "id");
    assert!(SelectionSetMixin::new(&mut op).is_empty());
}

/// Verifies that adding a sub-selection to a leaf field creates its
/// selection set.
#[test]
fn leaf_field_gains_selection_set() {
    let mut field = build::field_node("user").unwrap();
    assert!(!SelectionSetMixin::new(&mut field).has_selection_set());
    assert!(SelectionSetMixin::new(&mut field).is_empty());

    SelectionSetMixin::new(&mut field).create_field("name").unwrap();
    assert!(SelectionSetMixin::new(&mut field).has_selection_set());
    assert_eq!(SelectionSetMixin::new(&mut field).selections().len(), 1);
}

/// Verifies that fragment spreads live beside fields without sharing their
/// keys.
#[test]
fn fragment_spreads() {
    let mut fragment = build::fragment_definition_node(json!({
        "name": "UserParts",
        "typeCondition": "User",
        "selections": ["id"],
    })).unwrap();

    SelectionSetMixin::new(&mut fragment).create_fragment_spread("NameParts").unwrap();
    let selections = SelectionSetMixin::new(&mut fragment);
    assert_eq!(selections.fragment_spread_names(), vec!["NameParts"]);
    assert_eq!(selections.field_names(), vec!["id"]);
    assert!(selections.has_fragment_spread("NameParts"));

    let err = SelectionSetMixin::new(&mut fragment).get_field_mut("NameParts").unwrap_err();
    assert!(matches!(err, AstBuildError::NotFound { .. }));

    SelectionSetMixin::new(&mut fragment).remove_fragment_spread("NameParts").unwrap();
    assert!(matches!(fragment.selection_set.selections.as_slice(), [SelectionNode::Field(_)]));
}

/// Verifies that a field reached through `get_field_mut` is edited in
/// place, next to an existing fragment spread.
#[test]
fn get_field_mut_edits_in_place() {
    let mut op = build::operation_definition_node("Viewer").unwrap();
    let spread = build::fragment_spread_node("UserParts").unwrap();
    SelectionSetMixin::new(&mut op)
        .create_fragment_spread(spread)
        .unwrap()
        .create_field("id")
        .unwrap();

    let field = SelectionSetMixin::new(&mut op).get_field_mut("id").unwrap();
    field.alias = Some(build::name_node("ident").unwrap());

    assert_eq!(SelectionSetMixin::new(&mut op).field_names(), vec!["ident"]);
    assert_eq!(op.selection_set.selections.len(), 2);
    assert_eq!(op.selection_set.selections[0].kind(), NodeKind::FragmentSpread);
}

/// Verifies that failed operations on a leaf field leave it a leaf.
#[test]
fn failed_operations_keep_leaf_field_a_leaf() {
    let mut field = build::field_node("id").unwrap();

    let err = SelectionSetMixin::new(&mut field).remove_field("missing").unwrap_err();
    assert!(matches!(err, AstBuildError::NotFound { .. }));
    assert!(field.selection_set.is_none());

    let err = SelectionSetMixin::new(&mut field)
        .update_field("missing", "other")
        .unwrap_err();
    assert!(matches!(err, AstBuildError::NotFound { .. }));
    assert!(field.selection_set.is_none());

    let err = SelectionSetMixin::new(&mut field).get_field_mut("missing").unwrap_err();
    assert!(matches!(err, AstBuildError::NotFound { .. }));
    assert!(field.selection_set.is_none());

    assert!(SelectionSetMixin::new(&mut field).remove_fragment_spread("Parts").is_err());
    assert!(!SelectionSetMixin::new(&mut field).has_selection_set());
}
