use crate::api::mixins::name_of;
use crate::api::narrowing;
use crate::api::node_api;
use crate::api::FieldDefinitionApi;
use crate::api::InputValueDefinitionApi;
use crate::ast::EnumTypeDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputObjectTypeDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::InterfaceTypeDefinitionNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::ScalarTypeDefinitionNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::UnionTypeDefinitionNode;
use crate::build::Props;
use crate::crud;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

node_api! {
    /// An object type definition (`type User { ... }`).
    ObjectTypeApi => ObjectTypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        fields: FieldsMixin,
        interfaces: InterfacesMixin,
    }
}

node_api! {
    InterfaceTypeApi => InterfaceTypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        fields: FieldsMixin,
        interfaces: InterfacesMixin,
    }
}

node_api! {
    UnionTypeApi => UnionTypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        members: UnionMembersMixin,
    }
}

node_api! {
    ScalarTypeApi => ScalarTypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
    }
}

node_api! {
    EnumTypeApi => EnumTypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        values: EnumValuesMixin,
    }
}

node_api! {
    /// An input object type definition (`input NewUser { ... }`). Its
    /// fields are input value definitions.
    InputTypeApi => InputObjectTypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
        fields: FieldsMixin,
    }
}

node_api! {
    /// Any type definition, before narrowing to its concrete kind.
    TypeDefinitionApi => TypeDefinitionNode {
        name: NameMixin,
        description: DescriptionMixin,
        directives: DirectivesMixin,
    }
}

narrowing!(TypeDefinitionApi over TypeDefinitionNode {
    Object => is_object_type / into_object_type
        -> ObjectTypeApi as ObjectTypeDefinition,
    Interface => is_interface_type / into_interface_type
        -> InterfaceTypeApi as InterfaceTypeDefinition,
    Union => is_union_type / into_union_type
        -> UnionTypeApi as UnionTypeDefinition,
    Scalar => is_scalar_type / into_scalar_type
        -> ScalarTypeApi as ScalarTypeDefinition,
    Enum => is_enum_type / into_enum_type
        -> EnumTypeApi as EnumTypeDefinition,
    InputObject => is_input_type / into_input_type
        -> InputTypeApi as InputObjectTypeDefinition,
});

/// Shortcuts over the `fields` capability of types that have fields.
macro_rules! field_shortcuts {
    ($($api:ident: $field:ident -> $field_api:ident),* $(,)?) => {$(
        impl $api<'_> {
            pub fn field_names(&self) -> Vec<String> {
                crud::names_in(self.node.fields.as_slice(), name_of::<$field>)
            }

            pub fn has_field(&self, name: &str) -> bool {
                crud::position_in(self.node.fields.as_slice(), name_of::<$field>, name).is_some()
            }

            /// A wrapper over the named field; fails with
            /// [`AstBuildError::NotFound`] when there is none.
            pub fn field(&mut self, name: &str) -> Result<$field_api<'_>> {
                self.fields().get_mut(name).map($field_api::new)
            }

            pub fn create_field(&mut self, props: impl Into<Props<$field>>) -> Result<&mut Self> {
                self.fields().create(props)?;
                Ok(self)
            }

            pub fn update_field(
                &mut self,
                name: &str,
                partial: impl Into<Props<$field>>,
            ) -> Result<&mut Self> {
                self.fields().update(name, partial)?;
                Ok(self)
            }

            pub fn upsert_field(&mut self, props: impl Into<Props<$field>>) -> Result<&mut Self> {
                self.fields().upsert(props)?;
                Ok(self)
            }

            pub fn remove_field(&mut self, name: &str) -> Result<$field> {
                self.fields().remove(name)
            }
        }
    )*};
}

field_shortcuts! {
    ObjectTypeApi: FieldDefinitionNode -> FieldDefinitionApi,
    InterfaceTypeApi: FieldDefinitionNode -> FieldDefinitionApi,
    InputTypeApi: InputValueDefinitionNode -> InputValueDefinitionApi,
}
