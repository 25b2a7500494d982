use crate::ast::ArgumentNode;
use crate::ast::DirectiveNode;
use crate::ast::ListTypeNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::NonNullTypeNode;
use crate::ast::TypeNode;
use crate::ast::VariableNode;
use crate::build::concrete_constructors;
use crate::build::name_shorthand;
use crate::build::single_field;
use crate::build::AstNode;
use crate::build::PropsObject;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

concrete_constructors! {
    /// `"id"` or `{ value: "id" }`
    name_node => NameNode,
    /// `"id"`, `"$id"` or `{ name: "id" }`
    variable_node => VariableNode,
    /// `{ name: "if", value: true }`
    argument_node => ArgumentNode,
    /// `"deprecated"` or `{ name: "deprecated", arguments: [...] }`
    directive_node => DirectiveNode,
    /// `"User"` or `{ name: "User" }`
    named_type_node => NamedTypeNode,
    /// `"User"` (wrapped as `[User]`) or `{ type: <type props> }`
    list_type_node => ListTypeNode,
    /// `"User"` (wrapped as `User!`) or `{ type: <type props> }`. Wrapping
    /// an already non-null type collapses to a single non-null wrapper.
    non_null_type_node => NonNullTypeNode,
}

impl AstNode for NameNode {
    const KIND: NodeKind = NodeKind::Name;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        match primitive {
            Value::String(_) => Ok(single_field("value", primitive)),
            other => Err(AstBuildError::malformed(
                Some(Self::KIND),
                format!("expected a name string, found `{other}`"),
            )),
        }
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            value: props.required_string("value")?,
        })
    }
}

impl AstNode for VariableNode {
    const KIND: NodeKind = NodeKind::Variable;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        match primitive {
            Value::String(name) => {
                let name = name.strip_prefix('$').unwrap_or(&name).to_string();
                Ok(single_field("name", Value::String(name)))
            },
            other => name_shorthand(Self::KIND, other),
        }
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
        })
    }
}

impl AstNode for ArgumentNode {
    const KIND: NodeKind = NodeKind::Argument;

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive.clone())
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
            value: props.required_nullable("value")?,
        })
    }
}

impl AstNode for DirectiveNode {
    const KIND: NodeKind = NodeKind::Directive;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
            arguments: props.list("arguments")?,
        })
    }
}

impl AstNode for NamedTypeNode {
    const KIND: NodeKind = NodeKind::NamedType;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
        })
    }
}

impl AstNode for ListTypeNode {
    const KIND: NodeKind = NodeKind::ListType;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        Ok(single_field("type", primitive))
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let item_type: TypeNode = props.required("type")?;
        Ok(Self {
            type_: Box::new(item_type),
        })
    }
}

impl AstNode for NonNullTypeNode {
    const KIND: NodeKind = NodeKind::NonNullType;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        Ok(single_field("type", primitive))
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let inner: TypeNode = props.required("type")?;
        Ok(Self {
            type_: inner.into_nullable(),
        })
    }
}
