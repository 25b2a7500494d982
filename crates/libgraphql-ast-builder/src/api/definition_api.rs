use crate::api::node_api;
use crate::api::DirectiveDefinitionApi;
use crate::api::EnumTypeApi;
use crate::api::FragmentDefinitionApi;
use crate::api::InputTypeApi;
use crate::api::InterfaceTypeApi;
use crate::api::ObjectTypeApi;
use crate::api::OperationDefinitionApi;
use crate::api::ScalarTypeApi;
use crate::api::SchemaDefinitionApi;
use crate::api::TypeDefinitionApi;
use crate::api::TypeExtensionApi;
use crate::api::UnionTypeApi;
use crate::ast::DefinitionNode;
use crate::ast::NodeKinded;
use crate::AstBuildError;
use crate::NodeKind;

type Result<T> = std::result::Result<T, AstBuildError>;

node_api! {
    /// Any top-level definition of a document.
    DefinitionApi => DefinitionNode {}
}

fn mismatch(expected: NodeKind, actual: NodeKind) -> AstBuildError {
    AstBuildError::KindMismatch { expected, actual }
}

macro_rules! into_type_definition {
    ($($into:ident -> $target:ident as $kind:ident),* $(,)?) => {
        impl<'a> DefinitionApi<'a> {
            $(
                pub fn $into(self) -> Result<$target<'a>> {
                    let node: &'a mut DefinitionNode = self.node;
                    let actual = node.kind();
                    match node.as_type_definition_mut() {
                        Some(type_def) => TypeDefinitionApi::new(type_def).$into(),
                        None => Err(mismatch(NodeKind::$kind, actual)),
                    }
                }
            )*
        }
    };
}

into_type_definition! {
    into_object_type -> ObjectTypeApi as ObjectTypeDefinition,
    into_interface_type -> InterfaceTypeApi as InterfaceTypeDefinition,
    into_union_type -> UnionTypeApi as UnionTypeDefinition,
    into_scalar_type -> ScalarTypeApi as ScalarTypeDefinition,
    into_enum_type -> EnumTypeApi as EnumTypeDefinition,
    into_input_type -> InputTypeApi as InputObjectTypeDefinition,
}

impl<'a> DefinitionApi<'a> {
    /// See [`DefinitionNode::name`].
    pub fn name(&self) -> Option<&str> {
        self.node.name()
    }

    pub fn is_type_definition(&self) -> bool {
        self.node.as_type_definition().is_some()
    }

    pub fn is_executable(&self) -> bool {
        self.node.is_executable()
    }

    pub fn type_definition(self) -> Option<TypeDefinitionApi<'a>> {
        let node: &'a mut DefinitionNode = self.node;
        node.as_type_definition_mut().map(TypeDefinitionApi::new)
    }

    pub fn type_extension(self) -> Option<TypeExtensionApi<'a>> {
        let node: &'a mut DefinitionNode = self.node;
        node.as_type_extension_mut().map(TypeExtensionApi::new)
    }

    pub fn into_operation(self) -> Result<OperationDefinitionApi<'a>> {
        let node: &'a mut DefinitionNode = self.node;
        let actual = node.kind();
        node.as_operation_mut()
            .map(OperationDefinitionApi::new)
            .ok_or_else(|| mismatch(NodeKind::OperationDefinition, actual))
    }

    pub fn into_fragment(self) -> Result<FragmentDefinitionApi<'a>> {
        let node: &'a mut DefinitionNode = self.node;
        let actual = node.kind();
        node.as_fragment_mut()
            .map(FragmentDefinitionApi::new)
            .ok_or_else(|| mismatch(NodeKind::FragmentDefinition, actual))
    }

    pub fn into_directive_definition(self) -> Result<DirectiveDefinitionApi<'a>> {
        let node: &'a mut DefinitionNode = self.node;
        let actual = node.kind();
        node.as_directive_definition_mut()
            .map(DirectiveDefinitionApi::new)
            .ok_or_else(|| mismatch(NodeKind::DirectiveDefinition, actual))
    }

    pub fn into_schema_definition(self) -> Result<SchemaDefinitionApi<'a>> {
        let node: &'a mut DefinitionNode = self.node;
        let actual = node.kind();
        node.as_schema_definition_mut()
            .map(SchemaDefinitionApi::new)
            .ok_or_else(|| mismatch(NodeKind::SchemaDefinition, actual))
    }
}
