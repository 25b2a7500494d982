use crate::api::node_api;
use crate::ast::ArgumentNode;
use crate::ast::DirectiveNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::ValueNode;
use crate::build::value_node;
use crate::build::Props;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

node_api! {
    /// A field of an object or interface type.
    FieldDefinitionApi => FieldDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        arguments: ArgumentsMixin,
        type_ref: TypeMixin,
    }
}

node_api! {
    /// A field of an input object type, or an argument definition.
    InputValueDefinitionApi => InputValueDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        type_ref: TypeMixin,
        default_value: DefaultValueMixin,
    }
}
impl InputValueDefinitionApi<'_> {
    /// An output field with the same name, description, type and
    /// directives. The default value has no output counterpart and is
    /// dropped.
    pub fn to_field_definition(&self) -> FieldDefinitionNode {
        FieldDefinitionNode {
            description: self.node.description.clone(),
            name: self.node.name.clone(),
            arguments: vec![],
            type_: self.node.type_.clone(),
            directives: self.node.directives.clone(),
        }
    }
}

node_api! {
    EnumValueDefinitionApi => EnumValueDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
    }
}

node_api! {
    /// A directive annotation such as `@deprecated(reason: "...")`.
    DirectiveApi => DirectiveNode {
        name: NameMixin,
        arguments: ArgumentsMixin,
    }
}

node_api! {
    ArgumentApi => ArgumentNode {
        name: NameMixin,
    }
}
impl ArgumentApi<'_> {
    pub fn value(&self) -> &ValueNode {
        &self.node.value
    }

    pub fn set_value(&mut self, props: impl Into<Props<ValueNode>>) -> Result<&mut Self> {
        self.node.value = value_node(props)?;
        Ok(self)
    }
}
