use crate::ast::DirectiveNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::OperationType;
use crate::ast::StringValueNode;
use crate::ast::TypeNode;
use crate::ast::ValueNode;

// =============================================================================
// Schema & directive definitions
// =============================================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "SchemaDefinition", rename_all = "camelCase")]
pub struct SchemaDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub directives: Vec<DirectiveNode>,
    pub operation_types: Vec<OperationTypeDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "OperationTypeDefinition")]
pub struct OperationTypeDefinitionNode {
    pub operation: OperationType,
    #[serde(rename = "type")]
    pub type_: NamedTypeNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "DirectiveDefinition")]
pub struct DirectiveDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub arguments: Vec<InputValueDefinitionNode>,
    pub repeatable: bool,
    pub locations: Vec<NameNode>,
}

// =============================================================================
// Type definitions
// =============================================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ScalarTypeDefinition")]
pub struct ScalarTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ObjectTypeDefinition")]
pub struct ObjectTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub interfaces: Vec<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "InterfaceTypeDefinition")]
pub struct InterfaceTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub interfaces: Vec<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "UnionTypeDefinition")]
pub struct UnionTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub types: Vec<NamedTypeNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "EnumTypeDefinition")]
pub struct EnumTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub values: Vec<EnumValueDefinitionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "InputObjectTypeDefinition")]
pub struct InputObjectTypeDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<InputValueDefinitionNode>,
}

// =============================================================================
// Members of type definitions
// =============================================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "FieldDefinition")]
pub struct FieldDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub arguments: Vec<InputValueDefinitionNode>,
    #[serde(rename = "type")]
    pub type_: TypeNode,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "InputValueDefinition", rename_all = "camelCase")]
pub struct InputValueDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    #[serde(rename = "type")]
    pub type_: TypeNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ValueNode>,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "EnumValueDefinition")]
pub struct EnumValueDefinitionNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValueNode>,
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TypeDefinitionNode {
    Scalar(ScalarTypeDefinitionNode),
    Object(ObjectTypeDefinitionNode),
    Interface(InterfaceTypeDefinitionNode),
    Union(UnionTypeDefinitionNode),
    Enum(EnumTypeDefinitionNode),
    InputObject(InputObjectTypeDefinitionNode),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum TypeSystemDefinitionNode {
    Schema(SchemaDefinitionNode),
    Type(TypeDefinitionNode),
    Directive(DirectiveDefinitionNode),
}
