//! Node wrappers: borrowed views over one node each, assembled from the
//! capability modules in [`mixins`].
//!
//! A wrapper never owns its node (except [`DocumentApi`], which owns the
//! document it edits). Creating two wrappers one after another over the
//! same node is fine; each observes the other's edits.

mod definition_api;
mod document_api;
mod executable_api;
mod member_api;
pub mod mixins;
mod node_api;
mod schema_api;
mod type_api;
mod type_definition_api;
mod type_extension_api;

pub use definition_api::DefinitionApi;
pub use document_api::DocumentApi;
pub use executable_api::FieldApi;
pub use executable_api::FragmentDefinitionApi;
pub use executable_api::InlineFragmentApi;
pub use executable_api::OperationDefinitionApi;
pub use executable_api::SelectionSetApi;
pub use executable_api::VariableDefinitionApi;
pub use member_api::ArgumentApi;
pub use member_api::DirectiveApi;
pub use member_api::EnumValueDefinitionApi;
pub use member_api::FieldDefinitionApi;
pub use member_api::InputValueDefinitionApi;
pub use schema_api::DirectiveDefinitionApi;
pub use schema_api::SchemaDefinitionApi;
pub use type_api::TypeApi;
pub use type_definition_api::EnumTypeApi;
pub use type_definition_api::InputTypeApi;
pub use type_definition_api::InterfaceTypeApi;
pub use type_definition_api::ObjectTypeApi;
pub use type_definition_api::ScalarTypeApi;
pub use type_definition_api::TypeDefinitionApi;
pub use type_definition_api::UnionTypeApi;
pub use type_extension_api::EnumTypeExtApi;
pub use type_extension_api::InputTypeExtApi;
pub use type_extension_api::InterfaceTypeExtApi;
pub use type_extension_api::ObjectTypeExtApi;
pub use type_extension_api::ScalarTypeExtApi;
pub use type_extension_api::TypeExtensionApi;
pub use type_extension_api::UnionTypeExtApi;

pub(crate) use node_api::narrowing;
pub(crate) use node_api::node_api;

#[cfg(test)]
mod tests;
