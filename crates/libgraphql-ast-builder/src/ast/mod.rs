//! The canonical document tree.
//!
//! Every node is a plain, mutable Rust struct. Serializing a node produces
//! its canonical JSON shape: an object carrying the node's `kind` tag
//! followed by its camelCase fields, matching the graphql-js AST layout.
//! Deserializing runs the node factory, so canonical JSON and shorthand
//! props are accepted alike.

mod document;
mod executable_defs;
mod shared_nodes;
mod type_extensions;
mod type_system_defs;
mod values;

pub use document::DefinitionNode;
pub use document::DocumentNode;
pub use executable_defs::ExecutableDefinitionNode;
pub use executable_defs::FieldNode;
pub use executable_defs::FragmentDefinitionNode;
pub use executable_defs::FragmentSpreadNode;
pub use executable_defs::InlineFragmentNode;
pub use executable_defs::OperationDefinitionNode;
pub use executable_defs::OperationType;
pub use executable_defs::SelectionNode;
pub use executable_defs::SelectionSetNode;
pub use executable_defs::VariableDefinitionNode;
pub use shared_nodes::ArgumentNode;
pub use shared_nodes::DirectiveNode;
pub use shared_nodes::ListTypeNode;
pub use shared_nodes::NameNode;
pub use shared_nodes::NamedTypeNode;
pub use shared_nodes::NonNullTypeNode;
pub use shared_nodes::NullableTypeNode;
pub use shared_nodes::TypeNode;
pub use shared_nodes::VariableNode;
pub use type_extensions::EnumTypeExtensionNode;
pub use type_extensions::InputObjectTypeExtensionNode;
pub use type_extensions::InterfaceTypeExtensionNode;
pub use type_extensions::ObjectTypeExtensionNode;
pub use type_extensions::ScalarTypeExtensionNode;
pub use type_extensions::SchemaExtensionNode;
pub use type_extensions::TypeExtensionNode;
pub use type_extensions::TypeSystemExtensionNode;
pub use type_extensions::UnionTypeExtensionNode;
pub use type_system_defs::DirectiveDefinitionNode;
pub use type_system_defs::EnumTypeDefinitionNode;
pub use type_system_defs::EnumValueDefinitionNode;
pub use type_system_defs::FieldDefinitionNode;
pub use type_system_defs::InputObjectTypeDefinitionNode;
pub use type_system_defs::InputValueDefinitionNode;
pub use type_system_defs::InterfaceTypeDefinitionNode;
pub use type_system_defs::ObjectTypeDefinitionNode;
pub use type_system_defs::OperationTypeDefinitionNode;
pub use type_system_defs::ScalarTypeDefinitionNode;
pub use type_system_defs::SchemaDefinitionNode;
pub use type_system_defs::TypeDefinitionNode;
pub use type_system_defs::TypeSystemDefinitionNode;
pub use type_system_defs::UnionTypeDefinitionNode;
pub use values::BooleanValueNode;
pub use values::EnumValueNode;
pub use values::FloatValueNode;
pub use values::IntValueNode;
pub use values::ListValueNode;
pub use values::NullValueNode;
pub use values::ObjectFieldNode;
pub use values::ObjectValueNode;
pub use values::StringValueNode;
pub use values::ValueNode;

use crate::build::Buildable;
use crate::build::Props;
use crate::NodeKind;
use inherent::inherent;

/// Implemented by every node (concrete or union) to report its kind tag at
/// runtime.
pub trait NodeKinded {
    fn kind(&self) -> NodeKind;

    /// A short human-readable description of this node used in error
    /// messages, e.g. ``ObjectTypeDefinition `User` ``.
    fn context(&self) -> String;
}

macro_rules! node_common {
    ($node:ident) => {
        impl<'de> serde::Deserialize<'de> for $node {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$node as Buildable>::build_from_value(raw)
                    .map_err(serde::de::Error::custom)
            }
        }

        impl std::convert::From<$node> for Props<$node> {
            fn from(node: $node) -> Self {
                Props::Node(node)
            }
        }
    };
}

macro_rules! anonymous_nodes {
    ($($node:ident => $kind:ident),* $(,)?) => {$(
        node_common!($node);

        #[inherent]
        impl NodeKinded for $node {
            pub fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }

            pub fn context(&self) -> String {
                NodeKind::$kind.to_string()
            }
        }
    )*};
}

macro_rules! named_nodes {
    ($($node:ident => $kind:ident),* $(,)?) => {$(
        node_common!($node);

        #[inherent]
        impl NodeKinded for $node {
            pub fn kind(&self) -> NodeKind {
                NodeKind::$kind
            }

            pub fn context(&self) -> String {
                format!("{} `{}`", NodeKind::$kind, self.name.value)
            }
        }
    )*};
}

macro_rules! union_nodes {
    ($($node:ident { $($variant:ident),* $(,)? }),* $(,)?) => {$(
        node_common!($node);

        #[inherent]
        impl NodeKinded for $node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Self::$variant(inner) => inner.kind(),)*
                }
            }

            pub fn context(&self) -> String {
                match self {
                    $(Self::$variant(inner) => inner.context(),)*
                }
            }
        }
    )*};
}

anonymous_nodes! {
    BooleanValueNode => BooleanValue,
    DocumentNode => Document,
    EnumValueNode => EnumValue,
    FloatValueNode => FloatValue,
    InlineFragmentNode => InlineFragment,
    IntValueNode => IntValue,
    ListTypeNode => ListType,
    ListValueNode => ListValue,
    NonNullTypeNode => NonNullType,
    NullValueNode => NullValue,
    ObjectValueNode => ObjectValue,
    OperationTypeDefinitionNode => OperationTypeDefinition,
    SchemaDefinitionNode => SchemaDefinition,
    SchemaExtensionNode => SchemaExtension,
    SelectionSetNode => SelectionSet,
    StringValueNode => StringValue,
}

named_nodes! {
    ArgumentNode => Argument,
    DirectiveDefinitionNode => DirectiveDefinition,
    DirectiveNode => Directive,
    EnumTypeDefinitionNode => EnumTypeDefinition,
    EnumTypeExtensionNode => EnumTypeExtension,
    EnumValueDefinitionNode => EnumValueDefinition,
    FieldDefinitionNode => FieldDefinition,
    FieldNode => Field,
    FragmentDefinitionNode => FragmentDefinition,
    FragmentSpreadNode => FragmentSpread,
    InputObjectTypeDefinitionNode => InputObjectTypeDefinition,
    InputObjectTypeExtensionNode => InputObjectTypeExtension,
    InputValueDefinitionNode => InputValueDefinition,
    InterfaceTypeDefinitionNode => InterfaceTypeDefinition,
    InterfaceTypeExtensionNode => InterfaceTypeExtension,
    NamedTypeNode => NamedType,
    ObjectFieldNode => ObjectField,
    ObjectTypeDefinitionNode => ObjectTypeDefinition,
    ObjectTypeExtensionNode => ObjectTypeExtension,
    ScalarTypeDefinitionNode => ScalarTypeDefinition,
    ScalarTypeExtensionNode => ScalarTypeExtension,
    UnionTypeDefinitionNode => UnionTypeDefinition,
    UnionTypeExtensionNode => UnionTypeExtension,
    VariableNode => Variable,
}

union_nodes! {
    DefinitionNode { Executable, TypeSystem, TypeSystemExtension },
    ExecutableDefinitionNode { Operation, Fragment },
    NullableTypeNode { Named, List },
    SelectionNode { Field, FragmentSpread, InlineFragment },
    TypeDefinitionNode { Scalar, Object, Interface, Union, Enum, InputObject },
    TypeExtensionNode { Scalar, Object, Interface, Union, Enum, InputObject },
    TypeNode { Named, List, NonNull },
    TypeSystemDefinitionNode { Schema, Type, Directive },
    TypeSystemExtensionNode { Schema, Type },
    ValueNode {
        Variable, Int, Float, String, Boolean, Null, Enum, List, Object,
    },
}

// These carry no `name` field of their own (or an optional one), so they are
// registered by hand.
node_common!(NameNode);
node_common!(OperationDefinitionNode);
node_common!(VariableDefinitionNode);

#[inherent]
impl NodeKinded for NameNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Name
    }

    pub fn context(&self) -> String {
        format!("{} `{}`", NodeKind::Name, self.value)
    }
}

#[inherent]
impl NodeKinded for OperationDefinitionNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }

    pub fn context(&self) -> String {
        match &self.name {
            Some(name) => format!("{} `{}`", NodeKind::OperationDefinition, name.value),
            None => format!("anonymous {}", NodeKind::OperationDefinition),
        }
    }
}

#[inherent]
impl NodeKinded for VariableDefinitionNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }

    pub fn context(&self) -> String {
        format!("{} `${}`", NodeKind::VariableDefinition, self.variable.name.value)
    }
}

#[cfg(test)]
mod tests;
