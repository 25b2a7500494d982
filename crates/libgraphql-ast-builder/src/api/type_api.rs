use crate::ast::NamedTypeNode;
use crate::ast::TypeNode;
use crate::build::name_node;
use crate::build::type_node;
use crate::build::Props;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

/// A type reference (`User`, `[User!]`, `[[ID]]!`, ...) viewed as a single
/// editable value.
///
/// "Outer" below means the type with at most its outermost non-null wrapper
/// stripped: `[User!]!` is an outer list, `User!` is not.
#[derive(Debug)]
pub struct TypeApi<'a> {
    node: &'a mut TypeNode,
}
impl<'a> TypeApi<'a> {
    pub fn new(node: &'a mut TypeNode) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &TypeNode {
        self.node
    }

    pub fn into_node(self) -> &'a mut TypeNode {
        self.node
    }

    pub fn named_type(&self) -> &NamedTypeNode {
        self.node.named_type()
    }

    pub fn typename(&self) -> &str {
        self.node.typename()
    }

    /// Retargets the innermost named type, keeping every wrapper.
    pub fn set_typename(&mut self, typename: &str) -> Result<&mut Self> {
        self.node.named_type_mut().name = name_node(typename)?;
        Ok(self)
    }

    pub fn set(&mut self, props: impl Into<Props<TypeNode>>) -> Result<&mut Self> {
        *self.node = type_node(props)?;
        Ok(self)
    }

    /// Shallow: whether the outermost node is a list. Deep: whether a list
    /// appears at any level, so `[User]!` is a list only when deep.
    pub fn is_list(&self, deep: bool) -> bool {
        if deep {
            self.node.is_list()
        } else {
            matches!(*self.node, TypeNode::List(_))
        }
    }

    /// Shallow: whether the outermost wrapper is non-null. Deep: whether a
    /// non-null wrapper appears at any level.
    pub fn is_non_null(&self, deep: bool) -> bool {
        if deep {
            self.node.has_non_null()
        } else {
            self.node.is_non_null()
        }
    }

    /// `true` wraps the outer type in a list (`User!` => `[User]!`) unless it
    /// already is one; `false` collapses an outer list to its innermost named
    /// type (`[[User]]!` => `User!`). The outermost non-null wrapper is kept
    /// either way.
    pub fn set_list(&mut self, list: bool) -> &mut Self {
        if list == self.node.is_list() {
            return self;
        }
        let non_null = self.node.is_non_null();
        let updated = if list {
            self.node.nullable().into_list()
        } else {
            TypeNode::Named(self.node.named_type().clone())
        };
        *self.node = if non_null {
            updated.into_non_null()
        } else {
            updated
        };
        self
    }

    /// Adds or strips the outermost non-null wrapper.
    pub fn set_non_null(&mut self, non_null: bool) -> &mut Self {
        if non_null != self.node.is_non_null() {
            *self.node = if non_null {
                self.node.clone().into_non_null()
            } else {
                self.node.nullable()
            };
        }
        self
    }
}
impl std::fmt::Display for TypeApi<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node)
    }
}
