use crate::ast::DefinitionNode;
use crate::ast::ExecutableDefinitionNode;
use crate::ast::FieldNode;
use crate::ast::ListValueNode;
use crate::ast::NamedTypeNode;
use crate::ast::NullableTypeNode;
use crate::ast::ObjectFieldNode;
use crate::ast::ObjectValueNode;
use crate::ast::SelectionNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::TypeNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::ast::TypeSystemExtensionNode;
use crate::ast::ValueNode;
use crate::build::build_node;
use crate::build::kind_tag;
use crate::build::name_shorthand;
use crate::build::parse_type_reference;
use crate::build::AstNode;
use crate::build::Buildable;
use crate::build::Props;
use crate::build::PropsObject;
use crate::build::DEFINITION_TABLE;
use crate::build::EXECUTABLE_DEFINITION_TABLE;
use crate::build::SELECTION_TABLE;
use crate::build::TYPE_DEFINITION_TABLE;
use crate::build::TYPE_EXTENSION_TABLE;
use crate::build::TYPE_SYSTEM_DEFINITION_TABLE;
use crate::build::TYPE_SYSTEM_EXTENSION_TABLE;
use crate::build::TYPE_TABLE;
use crate::build::VALUE_TABLE;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

// =============================================================================
// Values
// =============================================================================

impl Buildable for ValueNode {
    const TARGET: &'static str = "Value";

    /// JSON primitives map onto the value kind of the same shape: `null`,
    /// booleans, integral numbers, other numbers, strings, arrays (as lists,
    /// recursively) and kind-less objects (as input objects, one field per
    /// entry in insertion order). Objects carrying a `kind` tag dispatch
    /// through the value table.
    fn build_from_value(raw: Value) -> Result<Self> {
        if kind_tag(&raw).is_some() {
            return VALUE_TABLE.build(raw);
        }
        Ok(match raw {
            Value::Null => ValueNode::Null(build_node(Value::Null)?),
            Value::Bool(_) => ValueNode::Boolean(build_node(raw)?),
            Value::Number(ref number) if number.is_i64() || number.is_u64() => {
                ValueNode::Int(build_node(raw)?)
            },
            Value::Number(_) => ValueNode::Float(build_node(raw)?),
            Value::String(_) => ValueNode::String(build_node(raw)?),
            Value::Array(items) => ValueNode::List(ListValueNode {
                values: items.into_iter()
                    .map(ValueNode::build_from_value)
                    .collect::<Result<_>>()?,
            }),
            Value::Object(entries) => ValueNode::Object(ObjectValueNode {
                fields: entries.into_iter()
                    .map(|(name, value)| Ok(ObjectFieldNode {
                        name: crate::build::name_node(name)?,
                        value: ValueNode::build_from_value(value)?,
                    }))
                    .collect::<Result<_>>()?,
            }),
        })
    }
}

/// Builds any value node. See [`ValueNode`]'s [`Buildable`] impl for how
/// JSON primitives are mapped.
pub fn value_node(props: impl Into<Props<ValueNode>>) -> Result<ValueNode> {
    crate::build::build(props)
}

// =============================================================================
// Types
// =============================================================================

impl Buildable for TypeNode {
    const TARGET: &'static str = "Type";

    /// A string is parsed as a type reference (`"[ID!]!"`); an object with a
    /// `kind` tag dispatches through the type table; any other object is read
    /// as `{ named, list, nonNull }` flags.
    fn build_from_value(raw: Value) -> Result<Self> {
        if kind_tag(&raw).is_some() {
            return TYPE_TABLE.build(raw);
        }
        match raw {
            Value::String(src) => parse_type_reference(&src),
            Value::Object(fields) => type_from_flags(fields),
            other => Err(AstBuildError::malformed(
                None,
                format!("cannot build a type from `{other}`"),
            )),
        }
    }
}

/// No flags => `Named`; `list` => `[Named]`; `nonNull` => `Named!`; both =>
/// `[Named!]!`. Nested lists aren't expressible with flags.
fn type_from_flags(fields: Map<String, Value>) -> Result<TypeNode> {
    let mut props = PropsObject::new(NodeKind::NamedType, fields);
    let named: NamedTypeNode = props.required("named")?;
    let list = props.flag("list")?.unwrap_or(false);
    let non_null = props.flag("nonNull")?.unwrap_or(false);

    let named = TypeNode::Named(named);
    Ok(match (list, non_null) {
        (false, false) => named,
        (true, false) => named.into_list(),
        (false, true) => named.into_non_null(),
        (true, true) => named.into_non_null().into_list().into_non_null(),
    })
}

impl Buildable for NullableTypeNode {
    const TARGET: &'static str = "NullableType";

    fn build_from_value(raw: Value) -> Result<Self> {
        Ok(TypeNode::build_from_value(raw)?.into_nullable())
    }
}

pub fn type_node(props: impl Into<Props<TypeNode>>) -> Result<TypeNode> {
    crate::build::build(props)
}

// =============================================================================
// Selections
// =============================================================================

impl Buildable for SelectionNode {
    const TARGET: &'static str = "Selection";

    /// Bare strings and kind-less objects build fields.
    fn build_from_value(raw: Value) -> Result<Self> {
        if kind_tag(&raw).is_some() {
            return SELECTION_TABLE.build(raw);
        }
        Ok(SelectionNode::Field(build_node::<FieldNode>(raw)?))
    }

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        <FieldNode as AstNode>::partial_shorthand(primitive)
    }
}

pub fn selection_node(props: impl Into<Props<SelectionNode>>) -> Result<SelectionNode> {
    crate::build::build(props)
}

// =============================================================================
// Definitions
// =============================================================================

macro_rules! tagged_unions {
    ($($(#[$meta:meta])* $ctor:ident => $node:ident via $table:ident),* $(,)?) => {$(
        impl Buildable for $node {
            const TARGET: &'static str = stringify!($node);

            fn build_from_value(raw: Value) -> Result<Self> {
                $table.build(raw)
            }

            fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
                name_shorthand(NodeKind::Name, primitive.clone())
            }
        }

        $(#[$meta])*
        pub fn $ctor(props: impl Into<Props<$node>>) -> Result<$node> {
            crate::build::build(props)
        }
    )*};
}

tagged_unions! {
    /// Any of the six type definitions, selected by `kind`.
    type_definition_node => TypeDefinitionNode via TYPE_DEFINITION_TABLE,
    /// Any of the six type extensions, selected by `kind`.
    type_extension_node => TypeExtensionNode via TYPE_EXTENSION_TABLE,
    type_system_definition_node => TypeSystemDefinitionNode via TYPE_SYSTEM_DEFINITION_TABLE,
    type_system_extension_node => TypeSystemExtensionNode via TYPE_SYSTEM_EXTENSION_TABLE,
    executable_definition_node => ExecutableDefinitionNode via EXECUTABLE_DEFINITION_TABLE,
    /// Any top-level definition, selected by `kind`.
    definition_node => DefinitionNode via DEFINITION_TABLE,
}
