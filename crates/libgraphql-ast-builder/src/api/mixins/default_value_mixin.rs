use crate::api::mixins::HasDefaultValue;
use crate::ast::ValueNode;
use crate::build::value_node;
use crate::build::Props;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

#[derive(Debug)]
pub struct DefaultValueMixin<'a, N> {
    node: &'a mut N,
}
impl<'a, N: HasDefaultValue> DefaultValueMixin<'a, N> {
    pub fn new(node: &'a mut N) -> Self {
        Self { node }
    }

    pub fn has(&self) -> bool {
        self.node.default_value().is_some()
    }

    pub fn get(self) -> Option<&'a ValueNode> {
        let node: &'a N = self.node;
        node.default_value()
    }

    /// Accepts any value props, e.g. `json!(10)`, `json!(["a", "b"])` or an
    /// enum value node.
    pub fn set(&mut self, props: impl Into<Props<ValueNode>>) -> Result<&mut Self> {
        *self.node.default_value_mut() = Some(value_node(props)?);
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        *self.node.default_value_mut() = None;
        self
    }
}
