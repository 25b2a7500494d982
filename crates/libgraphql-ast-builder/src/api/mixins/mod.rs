//! Capability modules.
//!
//! Each module is a short-lived view bound to one node and implements a
//! single capability (name, description, directives, arguments, fields,
//! type, selection set, default value, kind assertion, ...) against the
//! structural trait in [`shapes`] that describes the field it needs. Node
//! wrappers in [`crate::api`] compose these modules by delegation.

mod default_value_mixin;
mod description_mixin;
mod fields_mixin;
mod kind_assertion_mixin;
mod name_mixin;
mod named_collection_mixin;
mod selection_set_mixin;
pub mod shapes;
mod type_mixin;

pub use default_value_mixin::DefaultValueMixin;
pub use description_mixin::DescriptionMixin;
pub use fields_mixin::ArgumentsMixin;
pub use fields_mixin::FieldsMixin;
pub use kind_assertion_mixin::KindAssertionMixin;
pub use name_mixin::NameMixin;
pub use name_mixin::OptionalNameMixin;
pub use named_collection_mixin::name_of;
pub use named_collection_mixin::operation_of;
pub use named_collection_mixin::DirectivesMixin;
pub use named_collection_mixin::EnumValuesMixin;
pub use named_collection_mixin::InterfacesMixin;
pub use named_collection_mixin::OperationTypesMixin;
pub use named_collection_mixin::UnionMembersMixin;
pub use named_collection_mixin::VariablesMixin;
pub use selection_set_mixin::SelectionSetMixin;
pub use shapes::HasArguments;
pub use shapes::HasDefaultValue;
pub use shapes::HasDescription;
pub use shapes::HasDirectives;
pub use shapes::HasEnumValues;
pub use shapes::HasFields;
pub use shapes::HasInterfaces;
pub use shapes::HasName;
pub use shapes::HasOperationTypes;
pub use shapes::HasOptionalName;
pub use shapes::HasSelectionSet;
pub use shapes::HasType;
pub use shapes::HasUnionMembers;
pub use shapes::HasVariableDefinitions;
pub use type_mixin::TypeMixin;

pub(crate) use named_collection_mixin::named_collection_mixin;

#[cfg(test)]
mod tests;
