use crate::ast::EnumTypeExtensionNode;
use crate::ast::InputObjectTypeExtensionNode;
use crate::ast::InterfaceTypeExtensionNode;
use crate::ast::ObjectTypeExtensionNode;
use crate::ast::ScalarTypeExtensionNode;
use crate::ast::SchemaExtensionNode;
use crate::ast::UnionTypeExtensionNode;
use crate::build::concrete_constructors;
use crate::build::name_shorthand;
use crate::build::AstNode;
use crate::build::PropsObject;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

concrete_constructors! {
    schema_extension_node => SchemaExtensionNode,
    scalar_type_extension_node => ScalarTypeExtensionNode,
    object_type_extension_node => ObjectTypeExtensionNode,
    interface_type_extension_node => InterfaceTypeExtensionNode,
    union_type_extension_node => UnionTypeExtensionNode,
    enum_type_extension_node => EnumTypeExtensionNode,
    input_object_type_extension_node => InputObjectTypeExtensionNode,
}

impl AstNode for SchemaExtensionNode {
    const KIND: NodeKind = NodeKind::SchemaExtension;

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            directives: props.list("directives")?,
            operation_types: props.list("operationTypes")?,
        })
    }
}

/// Type extensions carry the same members as their definitions, minus the
/// description.
macro_rules! type_extension_props {
    ($($node:ident => $kind:ident { $($field:ident: $key:literal),* $(,)? }),* $(,)?) => {$(
        impl AstNode for $node {
            const KIND: NodeKind = NodeKind::$kind;

            fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
                name_shorthand(Self::KIND, primitive)
            }

            fn from_props(mut props: PropsObject) -> Result<Self> {
                Ok(Self {
                    name: props.required("name")?,
                    $($field: props.list($key)?,)*
                })
            }
        }
    )*};
}

type_extension_props! {
    ScalarTypeExtensionNode => ScalarTypeExtension {
        directives: "directives",
    },
    ObjectTypeExtensionNode => ObjectTypeExtension {
        interfaces: "interfaces",
        directives: "directives",
        fields: "fields",
    },
    InterfaceTypeExtensionNode => InterfaceTypeExtension {
        interfaces: "interfaces",
        directives: "directives",
        fields: "fields",
    },
    UnionTypeExtensionNode => UnionTypeExtension {
        directives: "directives",
        types: "types",
    },
    EnumTypeExtensionNode => EnumTypeExtension {
        directives: "directives",
        values: "values",
    },
    InputObjectTypeExtensionNode => InputObjectTypeExtension {
        directives: "directives",
        fields: "fields",
    },
}
