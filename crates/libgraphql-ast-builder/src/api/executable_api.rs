use crate::api::node_api;
use crate::ast::FieldNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::InlineFragmentNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::OperationType;
use crate::ast::SelectionSetNode;
use crate::ast::VariableDefinitionNode;
use crate::build::name_node;
use crate::build::named_type_node;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

node_api! {
    /// `query Viewer($id: ID!) { ... }`
    OperationDefinitionApi => OperationDefinitionNode {
        name: OptionalNameMixin,
        directives: DirectivesMixin,
        variables: VariablesMixin,
        selection_set: SelectionSetMixin,
    }
}
impl OperationDefinitionApi<'_> {
    pub fn operation_type(&self) -> OperationType {
        self.node.operation
    }

    pub fn set_operation_type(&mut self, operation: OperationType) -> &mut Self {
        self.node.operation = operation;
        self
    }
}

node_api! {
    FragmentDefinitionApi => FragmentDefinitionNode {
        name: NameMixin,
        directives: DirectivesMixin,
        selection_set: SelectionSetMixin,
    }
}
impl FragmentDefinitionApi<'_> {
    pub fn type_condition(&self) -> &str {
        self.node.type_condition.name.as_str()
    }

    pub fn set_type_condition(&mut self, typename: &str) -> Result<&mut Self> {
        self.node.type_condition = named_type_node(typename)?;
        Ok(self)
    }
}

node_api! {
    InlineFragmentApi => InlineFragmentNode {
        directives: DirectivesMixin,
        selection_set: SelectionSetMixin,
    }
}
impl InlineFragmentApi<'_> {
    pub fn type_condition(&self) -> Option<&str> {
        self.node.type_condition.as_ref().map(|named| named.name.as_str())
    }

    /// `None` removes the condition (`... @include(if: $x) { ... }`).
    pub fn set_type_condition(&mut self, typename: Option<&str>) -> Result<&mut Self> {
        self.node.type_condition = typename.map(named_type_node).transpose()?;
        Ok(self)
    }
}

node_api! {
    /// `$id: ID! = 1`, named by the variable without its `$`.
    VariableDefinitionApi => VariableDefinitionNode {
        name: NameMixin,
        type_ref: TypeMixin,
        default_value: DefaultValueMixin,
        directives: DirectivesMixin,
    }
}

node_api! {
    FieldApi => FieldNode {
        name: NameMixin,
        arguments: ArgumentsMixin,
        directives: DirectivesMixin,
        selection_set: SelectionSetMixin,
    }
}
impl FieldApi<'_> {
    pub fn alias(&self) -> Option<&str> {
        self.node.alias.as_ref().map(|alias| alias.as_str())
    }

    pub fn response_name(&self) -> &str {
        self.node.response_name()
    }

    /// Changing the alias changes the key the field is found by in its
    /// parent selection set.
    pub fn set_alias(&mut self, alias: Option<&str>) -> Result<&mut Self> {
        self.node.alias = alias.map(name_node).transpose()?;
        Ok(self)
    }
}

node_api! {
    SelectionSetApi => SelectionSetNode {
        selection_set: SelectionSetMixin,
    }
}
