use crate::api::node_api;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::OperationType;
use crate::ast::SchemaDefinitionNode;
use crate::build::name_node;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

node_api! {
    /// `schema { query: Query ... }`
    SchemaDefinitionApi => SchemaDefinitionNode {
        description: DescriptionMixin,
        directives: DirectivesMixin,
        operation_types: OperationTypesMixin,
    }
}
impl SchemaDefinitionApi<'_> {
    /// The root type name for `operation`; `None` when the schema does not
    /// declare one.
    pub fn root_typename(&self, operation: OperationType) -> Option<&str> {
        self.node.operation_types.iter()
            .find(|op_type| op_type.operation == operation)
            .map(|op_type| op_type.type_.name.as_str())
    }
}

node_api! {
    /// `directive @auth(role: Role) repeatable on FIELD_DEFINITION`
    DirectiveDefinitionApi => DirectiveDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        arguments: ArgumentsMixin,
    }
}
impl DirectiveDefinitionApi<'_> {
    pub fn is_repeatable(&self) -> bool {
        self.node.repeatable
    }

    pub fn set_repeatable(&mut self, repeatable: bool) -> &mut Self {
        self.node.repeatable = repeatable;
        self
    }

    pub fn locations(&self) -> Vec<&str> {
        self.node.locations.iter()
            .map(|location| location.as_str())
            .collect()
    }

    pub fn has_location(&self, location: &str) -> bool {
        self.node.locations.iter().any(|existing| existing.as_str() == location)
    }

    /// Appends `location` unless it is already listed.
    pub fn add_location(&mut self, location: &str) -> Result<&mut Self> {
        if !self.has_location(location) {
            self.node.locations.push(name_node(location)?);
        }
        Ok(self)
    }

    pub fn remove_location(&mut self, location: &str) -> &mut Self {
        self.node.locations.retain(|existing| existing.as_str() != location);
        self
    }
}
