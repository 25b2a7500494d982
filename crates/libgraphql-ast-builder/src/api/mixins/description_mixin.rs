use crate::api::mixins::HasDescription;
use crate::ast::StringValueNode;

#[derive(Debug)]
pub struct DescriptionMixin<'a, N> {
    node: &'a mut N,
}
impl<'a, N: HasDescription> DescriptionMixin<'a, N> {
    pub fn new(node: &'a mut N) -> Self {
        Self { node }
    }

    /// With `None`, whether any description is set; with `Some(text)`,
    /// whether the description is exactly `text`.
    pub fn has(&self, value: Option<&str>) -> bool {
        match (self.node.description(), value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(description), Some(value)) => description.value == value,
        }
    }

    pub fn get(self) -> Option<&'a str> {
        let node: &'a N = self.node;
        node.description().map(|description| description.value.as_str())
    }

    /// `None` clears the description.
    pub fn set(&mut self, value: Option<&str>) -> &mut Self {
        *self.node.description_mut() = value.map(|value| StringValueNode {
            value: value.to_string(),
            block: None,
        });
        self
    }
}
