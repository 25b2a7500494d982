//! Structural traits describing the fields a capability module needs.
//!
//! Each trait exposes exactly one field (or one collection) of a node so
//! that a capability module can be written once and bound to every node
//! kind that carries that field.

use crate::ast::ArgumentNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::DirectiveNode;
use crate::ast::EnumTypeDefinitionNode;
use crate::ast::EnumTypeExtensionNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::FieldNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::FragmentSpreadNode;
use crate::ast::InlineFragmentNode;
use crate::ast::InputObjectTypeDefinitionNode;
use crate::ast::InputObjectTypeExtensionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::InterfaceTypeDefinitionNode;
use crate::ast::InterfaceTypeExtensionNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::ObjectFieldNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::ObjectTypeExtensionNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::OperationTypeDefinitionNode;
use crate::ast::ScalarTypeDefinitionNode;
use crate::ast::ScalarTypeExtensionNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::SchemaExtensionNode;
use crate::ast::SelectionSetNode;
use crate::ast::StringValueNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::TypeNode;
use crate::ast::UnionTypeDefinitionNode;
use crate::ast::UnionTypeExtensionNode;
use crate::ast::ValueNode;
use crate::ast::VariableDefinitionNode;
use crate::ast::VariableNode;
use inherent::inherent;

// =============================================================================
// Traits
// =============================================================================

pub trait HasName {
    fn name(&self) -> &NameNode;
    fn name_mut(&mut self) -> &mut NameNode;
}

/// Operations are the only nodes whose name may be omitted.
pub trait HasOptionalName {
    fn name(&self) -> Option<&NameNode>;
    fn name_mut(&mut self) -> &mut Option<NameNode>;
}

pub trait HasDescription {
    fn description(&self) -> Option<&StringValueNode>;
    fn description_mut(&mut self) -> &mut Option<StringValueNode>;
}

pub trait HasDirectives {
    fn directives(&self) -> &[DirectiveNode];
    fn directives_mut(&mut self) -> &mut Vec<DirectiveNode>;
}

/// Arguments are [`ArgumentNode`]s on directives and fields of an executable
/// document, and [`InputValueDefinitionNode`]s on field and directive
/// definitions.
pub trait HasArguments {
    type Argument;

    fn arguments(&self) -> &[Self::Argument];
    fn arguments_mut(&mut self) -> &mut Vec<Self::Argument>;
}

/// Fields are [`FieldDefinitionNode`]s on object and interface types, and
/// [`InputValueDefinitionNode`]s on input object types.
pub trait HasFields {
    type Field;

    fn fields(&self) -> &[Self::Field];
    fn fields_mut(&mut self) -> &mut Vec<Self::Field>;
}

pub trait HasEnumValues {
    fn values(&self) -> &[EnumValueDefinitionNode];
    fn values_mut(&mut self) -> &mut Vec<EnumValueDefinitionNode>;
}

pub trait HasUnionMembers {
    fn types(&self) -> &[NamedTypeNode];
    fn types_mut(&mut self) -> &mut Vec<NamedTypeNode>;
}

pub trait HasInterfaces {
    fn interfaces(&self) -> &[NamedTypeNode];
    fn interfaces_mut(&mut self) -> &mut Vec<NamedTypeNode>;
}

pub trait HasOperationTypes {
    fn operation_types(&self) -> &[OperationTypeDefinitionNode];
    fn operation_types_mut(&mut self) -> &mut Vec<OperationTypeDefinitionNode>;
}

pub trait HasVariableDefinitions {
    fn variable_definitions(&self) -> &[VariableDefinitionNode];
    fn variable_definitions_mut(&mut self) -> &mut Vec<VariableDefinitionNode>;
}

pub trait HasType {
    fn type_ref(&self) -> &TypeNode;
    fn type_ref_mut(&mut self) -> &mut TypeNode;
}

pub trait HasSelectionSet {
    fn selection_set(&self) -> Option<&SelectionSetNode>;

    /// The selection set, created empty first where it is optional.
    fn selection_set_mut(&mut self) -> &mut SelectionSetNode;

    /// Drops an optional selection set again. Required ones are kept.
    fn clear_selection_set(&mut self) {}
}

pub trait HasDefaultValue {
    fn default_value(&self) -> Option<&ValueNode>;
    fn default_value_mut(&mut self) -> &mut Option<ValueNode>;
}

// =============================================================================
// Impls
// =============================================================================

macro_rules! has_name {
    ($($node:ident),* $(,)?) => {$(
        #[inherent]
        impl HasName for $node {
            pub fn name(&self) -> &NameNode {
                &self.name
            }

            pub fn name_mut(&mut self) -> &mut NameNode {
                &mut self.name
            }
        }
    )*};
}

macro_rules! has_description {
    ($($node:ident),* $(,)?) => {$(
        #[inherent]
        impl HasDescription for $node {
            pub fn description(&self) -> Option<&StringValueNode> {
                self.description.as_ref()
            }

            pub fn description_mut(&mut self) -> &mut Option<StringValueNode> {
                &mut self.description
            }
        }
    )*};
}

macro_rules! has_collection {
    (
        $shape:ident($field:ident, $field_mut:ident) of $elem:ty:
        $($node:ident),* $(,)?
    ) => {$(
        #[inherent]
        impl $shape for $node {
            pub fn $field(&self) -> &[$elem] {
                self.$field.as_slice()
            }

            pub fn $field_mut(&mut self) -> &mut Vec<$elem> {
                &mut self.$field
            }
        }
    )*};
}

macro_rules! has_assoc_collection {
    (
        $shape:ident::$assoc:ident($field:ident, $field_mut:ident) of $elem:ty:
        $($node:ident),* $(,)?
    ) => {$(
        #[inherent]
        impl $shape for $node {
            type $assoc = $elem;

            pub fn $field(&self) -> &[$elem] {
                self.$field.as_slice()
            }

            pub fn $field_mut(&mut self) -> &mut Vec<$elem> {
                &mut self.$field
            }
        }
    )*};
}

has_name! {
    ArgumentNode,
    DirectiveDefinitionNode,
    DirectiveNode,
    EnumTypeDefinitionNode,
    EnumTypeExtensionNode,
    EnumValueDefinitionNode,
    FieldDefinitionNode,
    FieldNode,
    FragmentDefinitionNode,
    FragmentSpreadNode,
    InputObjectTypeDefinitionNode,
    InputObjectTypeExtensionNode,
    InputValueDefinitionNode,
    InterfaceTypeDefinitionNode,
    InterfaceTypeExtensionNode,
    NamedTypeNode,
    ObjectFieldNode,
    ObjectTypeDefinitionNode,
    ObjectTypeExtensionNode,
    ScalarTypeDefinitionNode,
    ScalarTypeExtensionNode,
    UnionTypeDefinitionNode,
    UnionTypeExtensionNode,
    VariableNode,
}

has_description! {
    DirectiveDefinitionNode,
    EnumTypeDefinitionNode,
    EnumValueDefinitionNode,
    FieldDefinitionNode,
    InputObjectTypeDefinitionNode,
    InputValueDefinitionNode,
    InterfaceTypeDefinitionNode,
    ObjectTypeDefinitionNode,
    ScalarTypeDefinitionNode,
    SchemaDefinitionNode,
    UnionTypeDefinitionNode,
}

has_collection! {
    HasDirectives(directives, directives_mut) of DirectiveNode:
    EnumTypeDefinitionNode,
    EnumTypeExtensionNode,
    EnumValueDefinitionNode,
    FieldDefinitionNode,
    FieldNode,
    FragmentDefinitionNode,
    FragmentSpreadNode,
    InlineFragmentNode,
    InputObjectTypeDefinitionNode,
    InputObjectTypeExtensionNode,
    InputValueDefinitionNode,
    InterfaceTypeDefinitionNode,
    InterfaceTypeExtensionNode,
    ObjectTypeDefinitionNode,
    ObjectTypeExtensionNode,
    OperationDefinitionNode,
    ScalarTypeDefinitionNode,
    ScalarTypeExtensionNode,
    SchemaDefinitionNode,
    SchemaExtensionNode,
    UnionTypeDefinitionNode,
    UnionTypeExtensionNode,
    VariableDefinitionNode,
}

has_collection! {
    HasEnumValues(values, values_mut) of EnumValueDefinitionNode:
    EnumTypeDefinitionNode,
    EnumTypeExtensionNode,
}

has_collection! {
    HasUnionMembers(types, types_mut) of NamedTypeNode:
    UnionTypeDefinitionNode,
    UnionTypeExtensionNode,
}

has_collection! {
    HasInterfaces(interfaces, interfaces_mut) of NamedTypeNode:
    InterfaceTypeDefinitionNode,
    InterfaceTypeExtensionNode,
    ObjectTypeDefinitionNode,
    ObjectTypeExtensionNode,
}

has_collection! {
    HasOperationTypes(operation_types, operation_types_mut) of OperationTypeDefinitionNode:
    SchemaDefinitionNode,
    SchemaExtensionNode,
}

has_collection! {
    HasVariableDefinitions(variable_definitions, variable_definitions_mut)
        of VariableDefinitionNode:
    OperationDefinitionNode,
}

has_assoc_collection! {
    HasArguments::Argument(arguments, arguments_mut) of ArgumentNode:
    DirectiveNode,
    FieldNode,
}

has_assoc_collection! {
    HasArguments::Argument(arguments, arguments_mut) of InputValueDefinitionNode:
    DirectiveDefinitionNode,
    FieldDefinitionNode,
}

has_assoc_collection! {
    HasFields::Field(fields, fields_mut) of FieldDefinitionNode:
    InterfaceTypeDefinitionNode,
    InterfaceTypeExtensionNode,
    ObjectTypeDefinitionNode,
    ObjectTypeExtensionNode,
}

has_assoc_collection! {
    HasFields::Field(fields, fields_mut) of InputValueDefinitionNode:
    InputObjectTypeDefinitionNode,
    InputObjectTypeExtensionNode,
}

// ─── Hand-written impls ──────────────────────────────────────────────────────

/// A variable definition is named by its variable (without the `$`).
#[inherent]
impl HasName for VariableDefinitionNode {
    pub fn name(&self) -> &NameNode {
        &self.variable.name
    }

    pub fn name_mut(&mut self) -> &mut NameNode {
        &mut self.variable.name
    }
}

#[inherent]
impl HasOptionalName for OperationDefinitionNode {
    pub fn name(&self) -> Option<&NameNode> {
        self.name.as_ref()
    }

    pub fn name_mut(&mut self) -> &mut Option<NameNode> {
        &mut self.name
    }
}

macro_rules! has_type {
    ($($node:ident),* $(,)?) => {$(
        #[inherent]
        impl HasType for $node {
            pub fn type_ref(&self) -> &TypeNode {
                &self.type_
            }

            pub fn type_ref_mut(&mut self) -> &mut TypeNode {
                &mut self.type_
            }
        }
    )*};
}

has_type! {
    FieldDefinitionNode,
    InputValueDefinitionNode,
    VariableDefinitionNode,
}

macro_rules! has_default_value {
    ($($node:ident),* $(,)?) => {$(
        #[inherent]
        impl HasDefaultValue for $node {
            pub fn default_value(&self) -> Option<&ValueNode> {
                self.default_value.as_ref()
            }

            pub fn default_value_mut(&mut self) -> &mut Option<ValueNode> {
                &mut self.default_value
            }
        }
    )*};
}

has_default_value! {
    InputValueDefinitionNode,
    VariableDefinitionNode,
}

macro_rules! has_required_selection_set {
    ($($node:ident),* $(,)?) => {$(
        #[inherent]
        impl HasSelectionSet for $node {
            pub fn selection_set(&self) -> Option<&SelectionSetNode> {
                Some(&self.selection_set)
            }

            pub fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
                &mut self.selection_set
            }
        }
    )*};
}

has_required_selection_set! {
    FragmentDefinitionNode,
    InlineFragmentNode,
    OperationDefinitionNode,
}

#[inherent]
impl HasSelectionSet for FieldNode {
    pub fn selection_set(&self) -> Option<&SelectionSetNode> {
        self.selection_set.as_ref()
    }

    pub fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
        self.selection_set.get_or_insert_with(SelectionSetNode::default)
    }

    pub fn clear_selection_set(&mut self) {
        self.selection_set = None;
    }
}

/// A selection set is its own selection set, so the selection capability
/// can be bound to it directly.
impl HasSelectionSet for SelectionSetNode {
    fn selection_set(&self) -> Option<&SelectionSetNode> {
        Some(self)
    }

    fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
        self
    }
}

// ─── Polymorphic definitions ─────────────────────────────────────────────────

macro_rules! delegate_to_variants {
    ($union:ident { $($variant:ident),* $(,)? }) => {
        #[inherent]
        impl HasName for $union {
            pub fn name(&self) -> &NameNode {
                match self {
                    $(Self::$variant(inner) => &inner.name,)*
                }
            }

            pub fn name_mut(&mut self) -> &mut NameNode {
                match self {
                    $(Self::$variant(inner) => &mut inner.name,)*
                }
            }
        }

        #[inherent]
        impl HasDirectives for $union {
            pub fn directives(&self) -> &[DirectiveNode] {
                match self {
                    $(Self::$variant(inner) => inner.directives.as_slice(),)*
                }
            }

            pub fn directives_mut(&mut self) -> &mut Vec<DirectiveNode> {
                match self {
                    $(Self::$variant(inner) => &mut inner.directives,)*
                }
            }
        }
    };
}

delegate_to_variants!(TypeDefinitionNode {
    Scalar, Object, Interface, Union, Enum, InputObject,
});

delegate_to_variants!(TypeExtensionNode {
    Scalar, Object, Interface, Union, Enum, InputObject,
});

#[inherent]
impl HasDescription for TypeDefinitionNode {
    pub fn description(&self) -> Option<&StringValueNode> {
        match self {
            Self::Scalar(def) => def.description.as_ref(),
            Self::Object(def) => def.description.as_ref(),
            Self::Interface(def) => def.description.as_ref(),
            Self::Union(def) => def.description.as_ref(),
            Self::Enum(def) => def.description.as_ref(),
            Self::InputObject(def) => def.description.as_ref(),
        }
    }

    pub fn description_mut(&mut self) -> &mut Option<StringValueNode> {
        match self {
            Self::Scalar(def) => &mut def.description,
            Self::Object(def) => &mut def.description,
            Self::Interface(def) => &mut def.description,
            Self::Union(def) => &mut def.description,
            Self::Enum(def) => &mut def.description,
            Self::InputObject(def) => &mut def.description,
        }
    }
}
