use crate::api::mixins::HasName;
use crate::api::mixins::HasOptionalName;
use crate::build::name_node;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

#[derive(Debug)]
pub struct NameMixin<'a, N> {
    node: &'a mut N,
}
impl<'a, N: HasName> NameMixin<'a, N> {
    pub fn new(node: &'a mut N) -> Self {
        Self { node }
    }

    pub fn get(self) -> &'a str {
        let node: &'a N = self.node;
        node.name().as_str()
    }

    /// Renames the node in place. Uniqueness among siblings is not checked
    /// here; rename through the owning collection's `update` for that.
    pub fn set(&mut self, name: &str) -> Result<&mut Self> {
        *self.node.name_mut() = name_node(name)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub struct OptionalNameMixin<'a, N> {
    node: &'a mut N,
}
impl<'a, N: HasOptionalName> OptionalNameMixin<'a, N> {
    pub fn new(node: &'a mut N) -> Self {
        Self { node }
    }

    pub fn get(self) -> Option<&'a str> {
        let node: &'a N = self.node;
        node.name().map(|name| name.as_str())
    }

    pub fn set(&mut self, name: &str) -> Result<&mut Self> {
        *self.node.name_mut() = Some(name_node(name)?);
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        *self.node.name_mut() = None;
        self
    }
}
