/// Declares a node wrapper: a borrowed view over one node that composes
/// capability modules by delegation. Each `accessor: Mixin` pair becomes a
/// method returning a fresh `Mixin` bound to the wrapped node.
macro_rules! node_api {
    (
        $(#[$meta:meta])*
        $api:ident => $node:ty {
            $($(#[$accessor_meta:meta])* $accessor:ident: $mixin:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $api<'a> {
            node: &'a mut $node,
        }

        impl<'a> $api<'a> {
            pub fn new(node: &'a mut $node) -> Self {
                Self { node }
            }

            pub fn node(&self) -> &$node {
                &*self.node
            }

            pub fn node_mut(&mut self) -> &mut $node {
                &mut *self.node
            }

            pub fn into_node(self) -> &'a mut $node {
                self.node
            }

            pub fn kind(&self) -> crate::NodeKind {
                crate::ast::NodeKinded::kind(&*self.node)
            }

            pub fn kind_assertion(&self) -> crate::api::mixins::KindAssertionMixin<'_, $node> {
                crate::api::mixins::KindAssertionMixin::new(&*self.node)
            }

            $(
                $(#[$accessor_meta])*
                pub fn $accessor(&mut self) -> crate::api::mixins::$mixin<'_, $node> {
                    crate::api::mixins::$mixin::new(&mut *self.node)
                }
            )*
        }

        impl<'a> std::convert::From<&'a mut $node> for $api<'a> {
            fn from(node: &'a mut $node) -> Self {
                Self::new(node)
            }
        }
    };
}
pub(crate) use node_api;

/// Generates `is_*`/`into_*` narrowing for a wrapper over a union node.
/// Narrowing into the wrong variant fails with
/// [`crate::AstBuildError::KindMismatch`].
macro_rules! narrowing {
    ($api:ident over $union:ident {
        $($variant:ident => $is:ident / $into:ident -> $target:ident as $kind:ident),* $(,)?
    }) => {
        impl<'a> $api<'a> {
            $(
                pub fn $is(&self) -> bool {
                    matches!(&*self.node, $union::$variant(_))
                }

                pub fn $into(self) -> std::result::Result<$target<'a>, crate::AstBuildError> {
                    let node: &'a mut $union = self.node;
                    match node {
                        $union::$variant(inner) => Ok($target::new(inner)),
                        other => Err(crate::AstBuildError::KindMismatch {
                            expected: crate::NodeKind::$kind,
                            actual: crate::ast::NodeKinded::kind(&*other),
                        }),
                    }
                }
            )*
        }
    };
}
pub(crate) use narrowing;
