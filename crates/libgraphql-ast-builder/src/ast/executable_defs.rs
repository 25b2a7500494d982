use crate::ast::ArgumentNode;
use crate::ast::DirectiveNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::TypeNode;
use crate::ast::ValueNode;
use crate::ast::VariableNode;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}
impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    /// The conventional root type name for this operation type.
    pub fn default_root_typename(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

// =============================================================================
// Operations & fragments
// =============================================================================

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "OperationDefinition", rename_all = "camelCase")]
pub struct OperationDefinitionNode {
    pub operation: OperationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NameNode>,
    pub variable_definitions: Vec<VariableDefinitionNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "VariableDefinition", rename_all = "camelCase")]
pub struct VariableDefinitionNode {
    pub variable: VariableNode,
    #[serde(rename = "type")]
    pub type_: TypeNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ValueNode>,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "FragmentDefinition", rename_all = "camelCase")]
pub struct FragmentDefinitionNode {
    pub name: NameNode,
    pub type_condition: NamedTypeNode,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
}

// =============================================================================
// Selections
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "SelectionSet")]
pub struct SelectionSetNode {
    pub selections: Vec<SelectionNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "Field", rename_all = "camelCase")]
pub struct FieldNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<NameNode>,
    pub name: NameNode,
    pub arguments: Vec<ArgumentNode>,
    pub directives: Vec<DirectiveNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<SelectionSetNode>,
}
impl FieldNode {
    /// The key this field's result is stored under: its alias if it has one,
    /// its name otherwise.
    pub fn response_name(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "FragmentSpread")]
pub struct FragmentSpreadNode {
    pub name: NameNode,
    pub directives: Vec<DirectiveNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "InlineFragment", rename_all = "camelCase")]
pub struct InlineFragmentNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_condition: Option<NamedTypeNode>,
    pub directives: Vec<DirectiveNode>,
    pub selection_set: SelectionSetNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum SelectionNode {
    Field(FieldNode),
    FragmentSpread(FragmentSpreadNode),
    InlineFragment(InlineFragmentNode),
}
impl SelectionNode {
    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut FieldNode> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ExecutableDefinitionNode {
    Operation(OperationDefinitionNode),
    Fragment(FragmentDefinitionNode),
}
