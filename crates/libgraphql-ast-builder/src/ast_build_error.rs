use crate::NodeKind;
use thiserror::Error;

/// Every failure surfaced by the node factory, the collection mutation
/// engine and the node APIs layered over them.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AstBuildError {
    #[error(
        "cannot {action} `{name}` in {collection} of {parent} because it \
        already exists"
    )]
    Conflict {
        action: &'static str,
        collection: &'static str,
        name: String,
        parent: String,
    },

    #[error("expected a `{expected}` node, but found a `{actual}` node")]
    KindMismatch {
        expected: NodeKind,
        actual: NodeKind,
    },

    #[error("malformed {}input: {reason}", kind_prefix(.kind))]
    MalformedInput {
        kind: Option<NodeKind>,
        reason: String,
    },

    #[error(
        "cannot {action} `{name}` in {collection} of {parent} because it \
        does not exist"
    )]
    NotFound {
        action: &'static str,
        collection: &'static str,
        name: String,
        parent: String,
    },

    #[error("unknown node kind `{kind}` for {table} props")]
    UnknownKind {
        kind: String,
        table: &'static str,
    },
}
impl AstBuildError {
    pub(crate) fn malformed(
        kind: Option<NodeKind>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            kind,
            reason: reason.into(),
        }
    }
}

fn kind_prefix(kind: &Option<NodeKind>) -> String {
    match kind {
        Some(kind) => format!("`{kind}` "),
        None => String::new(),
    }
}
