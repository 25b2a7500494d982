use crate::ast::FieldNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::FragmentSpreadNode;
use crate::ast::InlineFragmentNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::OperationType;
use crate::ast::SelectionSetNode;
use crate::ast::VariableDefinitionNode;
use crate::build::concrete_constructors;
use crate::build::name_shorthand;
use crate::build::single_field;
use crate::build::typed_name_shorthand;
use crate::build::AstNode;
use crate::build::PropsObject;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

concrete_constructors! {
    /// `"GetUser"` or `{ operation: "query", name, variableDefinitions,
    /// directives, selections }`. The operation defaults to `query`.
    operation_definition_node => OperationDefinitionNode,
    /// `"$id: ID!"` or `{ variable: "id", type: "ID!", defaultValue }`
    variable_definition_node => VariableDefinitionNode,
    /// `["id", "name"]` or `{ selections: [...] }`
    selection_set_node => SelectionSetNode,
    /// `"id"` or `{ alias, name, arguments, directives, selections }`
    field_node => FieldNode,
    fragment_spread_node => FragmentSpreadNode,
    /// `"User"` (the type condition) or `{ typeCondition, directives,
    /// selections }`
    inline_fragment_node => InlineFragmentNode,
    fragment_definition_node => FragmentDefinitionNode,
}

/// Reads a selection set given either as a `selections` list or as a
/// `selectionSet` (props or canonical node). `selections` wins when both are
/// present.
fn selection_set(props: &mut PropsObject) -> Result<Option<SelectionSetNode>> {
    if props.has("selections") {
        let selections = props.list("selections")?;
        props.take("selectionSet");
        return Ok(Some(SelectionSetNode { selections }));
    }
    props.optional("selectionSet")
}

impl AstNode for OperationDefinitionNode {
    const KIND: NodeKind = NodeKind::OperationDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            operation: props.operation("operation")?.unwrap_or(OperationType::Query),
            name: props.optional("name")?,
            variable_definitions: props.list("variableDefinitions")?,
            directives: props.list("directives")?,
            selection_set: selection_set(&mut props)?.unwrap_or_default(),
        })
    }
}

impl AstNode for VariableDefinitionNode {
    const KIND: NodeKind = NodeKind::VariableDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        typed_name_shorthand(Self::KIND, primitive, "variable", None)
    }

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        match primitive {
            Value::String(src) if !src.contains(':') => {
                Ok(single_field("variable", primitive.clone()))
            },
            _ => Self::shorthand(primitive.clone()),
        }
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            variable: props.required("variable")?,
            type_: props.required("type")?,
            default_value: props.optional("defaultValue")?,
            directives: props.list("directives")?,
        })
    }
}

impl AstNode for SelectionSetNode {
    const KIND: NodeKind = NodeKind::SelectionSet;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        Ok(single_field("selections", primitive))
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            selections: props.list("selections")?,
        })
    }
}

impl AstNode for FieldNode {
    const KIND: NodeKind = NodeKind::Field;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            alias: props.optional("alias")?,
            name: props.required("name")?,
            arguments: props.list("arguments")?,
            directives: props.list("directives")?,
            selection_set: selection_set(&mut props)?,
        })
    }
}

impl AstNode for FragmentSpreadNode {
    const KIND: NodeKind = NodeKind::FragmentSpread;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
            directives: props.list("directives")?,
        })
    }
}

impl AstNode for InlineFragmentNode {
    const KIND: NodeKind = NodeKind::InlineFragment;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        match primitive {
            Value::String(_) => Ok(single_field("typeCondition", primitive)),
            other => Err(AstBuildError::malformed(
                Some(Self::KIND),
                format!("expected a type condition, found `{other}`"),
            )),
        }
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            type_condition: props.optional("typeCondition")?,
            directives: props.list("directives")?,
            selection_set: selection_set(&mut props)?.unwrap_or_default(),
        })
    }
}

impl AstNode for FragmentDefinitionNode {
    const KIND: NodeKind = NodeKind::FragmentDefinition;

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive.clone())
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
            type_condition: props.required("typeCondition")?,
            directives: props.list("directives")?,
            selection_set: selection_set(&mut props)?.unwrap_or_default(),
        })
    }
}
