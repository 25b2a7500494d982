use crate::ast::DirectiveNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::OperationTypeDefinitionNode;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "SchemaExtension", rename_all = "camelCase")]
pub struct SchemaExtensionNode {
    pub directives: Vec<DirectiveNode>,
    pub operation_types: Vec<OperationTypeDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ScalarTypeExtension")]
pub struct ScalarTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ObjectTypeExtension")]
pub struct ObjectTypeExtensionNode {
    pub name: NameNode,
    pub interfaces: Vec<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "InterfaceTypeExtension")]
pub struct InterfaceTypeExtensionNode {
    pub name: NameNode,
    pub interfaces: Vec<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "UnionTypeExtension")]
pub struct UnionTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub types: Vec<NamedTypeNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "EnumTypeExtension")]
pub struct EnumTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub values: Vec<EnumValueDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "InputObjectTypeExtension")]
pub struct InputObjectTypeExtensionNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<InputValueDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TypeExtensionNode {
    Scalar(ScalarTypeExtensionNode),
    Object(ObjectTypeExtensionNode),
    Interface(InterfaceTypeExtensionNode),
    Union(UnionTypeExtensionNode),
    Enum(EnumTypeExtensionNode),
    InputObject(InputObjectTypeExtensionNode),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TypeSystemExtensionNode {
    Schema(SchemaExtensionNode),
    Type(TypeExtensionNode),
}
