use crate::ast::NodeKinded;
use crate::AstBuildError;
use crate::NodeKind;

type Result<T> = std::result::Result<T, AstBuildError>;

#[derive(Debug)]
pub struct KindAssertionMixin<'a, N> {
    node: &'a N,
}
impl<'a, N: NodeKinded> KindAssertionMixin<'a, N> {
    pub fn new(node: &'a N) -> Self {
        Self { node }
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    pub fn is_kind(&self, kind: NodeKind) -> bool {
        self.node.kind() == kind
    }

    pub fn assert_kind(&self, kind: NodeKind) -> Result<&'a N> {
        let actual = self.node.kind();
        if actual != kind {
            return Err(AstBuildError::KindMismatch {
                expected: kind,
                actual,
            });
        }
        Ok(self.node)
    }
}
