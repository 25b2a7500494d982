use crate::api::mixins::HasType;
use crate::api::TypeApi;
use crate::ast::NamedTypeNode;
use crate::ast::TypeNode;
use crate::build::Props;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

/// The declared type of a field definition, input value or variable.
#[derive(Debug)]
pub struct TypeMixin<'a, N> {
    node: &'a mut N,
}
impl<'a, N: HasType> TypeMixin<'a, N> {
    pub fn new(node: &'a mut N) -> Self {
        Self { node }
    }

    pub fn get(self) -> TypeApi<'a> {
        let node: &'a mut N = self.node;
        TypeApi::new(node.type_ref_mut())
    }

    pub fn node(&self) -> &TypeNode {
        self.node.type_ref()
    }

    pub fn named_type(&self) -> &NamedTypeNode {
        self.node.type_ref().named_type()
    }

    pub fn typename(&self) -> &str {
        self.node.type_ref().typename()
    }

    pub fn set_typename(&mut self, typename: &str) -> Result<&mut Self> {
        self.api().set_typename(typename)?;
        Ok(self)
    }

    pub fn set(&mut self, props: impl Into<Props<TypeNode>>) -> Result<&mut Self> {
        self.api().set(props)?;
        Ok(self)
    }

    /// See [`TypeApi::is_list`].
    pub fn is_list(&self, deep: bool) -> bool {
        let type_ref = self.node.type_ref();
        if deep {
            type_ref.is_list()
        } else {
            matches!(type_ref, TypeNode::List(_))
        }
    }

    /// See [`TypeApi::is_non_null`].
    pub fn is_non_null(&self, deep: bool) -> bool {
        let type_ref = self.node.type_ref();
        if deep {
            type_ref.has_non_null()
        } else {
            type_ref.is_non_null()
        }
    }

    pub fn set_list(&mut self, list: bool) -> &mut Self {
        self.api().set_list(list);
        self
    }

    pub fn set_non_null(&mut self, non_null: bool) -> &mut Self {
        self.api().set_non_null(non_null);
        self
    }

    fn api(&mut self) -> TypeApi<'_> {
        TypeApi::new(self.node.type_ref_mut())
    }
}
