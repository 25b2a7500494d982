use crate::api::mixins::HasDirectives;
use crate::api::mixins::HasEnumValues;
use crate::api::mixins::HasInterfaces;
use crate::api::mixins::HasName;
use crate::api::mixins::HasOperationTypes;
use crate::api::mixins::HasUnionMembers;
use crate::api::mixins::HasVariableDefinitions;
use crate::ast::DirectiveNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::NamedTypeNode;
use crate::ast::NodeKinded;
use crate::ast::OperationTypeDefinitionNode;
use crate::ast::VariableDefinitionNode;

/// Names an element by its [`HasName`] name.
pub fn name_of<N: HasName>(node: &N) -> Option<&str> {
    Some(node.name().as_str())
}

/// Operation type definitions are unique by operation (`query`, ...).
pub fn operation_of(node: &OperationTypeDefinitionNode) -> Option<&str> {
    Some(node.operation.as_str())
}

/// Generates a capability module over one named collection of a node.
///
/// Reads that hand out borrowed data consume the module (it is a cheap
/// view, re-created from the wrapper for every access) so that the borrow
/// lives as long as the node does; mutators take `&mut self` and return
/// the module again so that they can be chained.
macro_rules! named_collection_mixin {
    (
        $(#[$meta:meta])*
        $mixin:ident<$shape:ident>::$items:ident/$items_mut:ident => $elem:ty,
        collection: $collection:literal,
        name_of: $name_of:expr
        $(, where: [$($extra:tt)*])? $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $mixin<'a, N> {
            node: &'a mut N,
        }

        impl<'a, N> $mixin<'a, N>
        where
            N: $shape + crate::ast::NodeKinded,
            $elem: crate::build::Buildable
                + Clone
                + crate::ast::NodeKinded
                + serde::Serialize,
            $($($extra)*,)?
        {
            pub fn new(node: &'a mut N) -> Self {
                Self { node }
            }

            fn crud(&mut self) -> crate::crud::Crud<'_, $elem> {
                crate::crud::Crud::new(
                    crate::ast::NodeKinded::context(&*self.node),
                    $collection,
                    self.node.$items_mut(),
                    $name_of,
                    crate::build::build_props::<$elem>,
                )
            }

            pub fn names(&self) -> Vec<String> {
                crate::crud::names_in(self.node.$items(), $name_of)
            }

            pub fn has(&self, name: &str) -> bool {
                crate::crud::position_in(self.node.$items(), $name_of, name).is_some()
            }

            pub fn list(self) -> &'a [$elem] {
                let node: &'a N = self.node;
                node.$items()
            }

            pub fn get(self, name: &str) -> std::result::Result<&'a $elem, crate::AstBuildError> {
                let node: &'a N = self.node;
                let parent = crate::ast::NodeKinded::context(node);
                crate::crud::find_in(node.$items(), $name_of, name).ok_or_else(|| {
                    crate::crud::not_found("get", $collection, name, parent)
                })
            }

            pub fn get_mut(
                self,
                name: &str,
            ) -> std::result::Result<&'a mut $elem, crate::AstBuildError> {
                let node: &'a mut N = self.node;
                crate::crud::Crud::new(
                    crate::ast::NodeKinded::context(&*node),
                    $collection,
                    node.$items_mut(),
                    $name_of,
                    crate::build::build_props::<$elem>,
                ).find_or_fail_mut(name)
            }

            pub fn create(
                &mut self,
                props: impl Into<crate::build::Props<$elem>>,
            ) -> std::result::Result<&mut Self, crate::AstBuildError> {
                self.crud().create(props)?;
                Ok(self)
            }

            pub fn update(
                &mut self,
                name: &str,
                partial: impl Into<crate::build::Props<$elem>>,
            ) -> std::result::Result<&mut Self, crate::AstBuildError> {
                self.crud().update(name, partial)?;
                Ok(self)
            }

            pub fn upsert(
                &mut self,
                props: impl Into<crate::build::Props<$elem>>,
            ) -> std::result::Result<&mut Self, crate::AstBuildError> {
                self.crud().upsert(props)?;
                Ok(self)
            }

            pub fn remove(
                &mut self,
                name: &str,
            ) -> std::result::Result<$elem, crate::AstBuildError> {
                self.crud().remove(name)
            }
        }
    };
}
pub(crate) use named_collection_mixin;

named_collection_mixin! {
    /// Directive annotations of any node that can carry them.
    DirectivesMixin<HasDirectives>::directives/directives_mut => DirectiveNode,
    collection: "directives",
    name_of: name_of::<DirectiveNode>,
}

named_collection_mixin! {
    EnumValuesMixin<HasEnumValues>::values/values_mut => EnumValueDefinitionNode,
    collection: "values",
    name_of: name_of::<EnumValueDefinitionNode>,
}

named_collection_mixin! {
    /// Member types of a union.
    UnionMembersMixin<HasUnionMembers>::types/types_mut => NamedTypeNode,
    collection: "types",
    name_of: name_of::<NamedTypeNode>,
}

named_collection_mixin! {
    /// Interfaces implemented by an object or interface type.
    InterfacesMixin<HasInterfaces>::interfaces/interfaces_mut => NamedTypeNode,
    collection: "interfaces",
    name_of: name_of::<NamedTypeNode>,
}

named_collection_mixin! {
    /// Root operation types of a schema definition or extension, keyed by
    /// operation (`"query"`, `"mutation"`, `"subscription"`).
    OperationTypesMixin<HasOperationTypes>::operation_types/operation_types_mut
        => OperationTypeDefinitionNode,
    collection: "operationTypes",
    name_of: operation_of,
}

named_collection_mixin! {
    /// Variable definitions of an operation, keyed by variable name (without
    /// the `$`).
    VariablesMixin<HasVariableDefinitions>::variable_definitions/variable_definitions_mut
        => VariableDefinitionNode,
    collection: "variableDefinitions",
    name_of: name_of::<VariableDefinitionNode>,
}

impl<N: HasOperationTypes + NodeKinded> OperationTypesMixin<'_, N> {
    /// The root type name registered for `operation`, if any.
    pub fn typename(&self, operation: &str) -> Option<&str> {
        crate::crud::find_in(self.node.operation_types(), operation_of, operation)
            .map(|op_type| op_type.type_.name.as_str())
    }
}
