//! The node factory: one canonical constructor per node kind, plus the
//! discriminant dispatch tables used to build union-typed nodes from a
//! runtime `kind` tag.
//!
//! Every constructor accepts [`Props`]: a bare primitive, a partial object
//! (whose fields are themselves props or canonical child nodes), or an
//! already-built node of the exact kind. Nested fields are normalized
//! recursively through their own constructors.

mod aliases;
pub mod coerce;
mod dispatch_table;
mod executable_defs;
mod props;
mod shared_nodes;
mod type_extensions;
mod type_reference;
mod type_system_defs;
mod unions;
mod values;

pub use aliases::*;
pub use dispatch_table::DispatchTable;
pub use dispatch_table::DEFINITION_TABLE;
pub use dispatch_table::EXECUTABLE_DEFINITION_TABLE;
pub use dispatch_table::SELECTION_TABLE;
pub use dispatch_table::TYPE_DEFINITION_TABLE;
pub use dispatch_table::TYPE_EXTENSION_TABLE;
pub use dispatch_table::TYPE_SYSTEM_DEFINITION_TABLE;
pub use dispatch_table::TYPE_SYSTEM_EXTENSION_TABLE;
pub use dispatch_table::TYPE_TABLE;
pub use dispatch_table::VALUE_TABLE;
pub use executable_defs::*;
pub use props::Props;
pub use props::PropsObject;
pub use shared_nodes::*;
pub use type_extensions::*;
pub use type_reference::parse_type_reference;
pub use type_system_defs::*;
pub use unions::*;
pub use values::*;

use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Anything the factory can produce from raw props: every concrete node and
/// every union of nodes.
pub trait Buildable: Sized {
    /// Name of the build target, used in error messages.
    const TARGET: &'static str;

    fn build_from_value(raw: Value) -> Result<Self>;

    /// Lowers a bare primitive used as a *partial update* into the object
    /// fields it stands for (e.g. a bare string renames a named node).
    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        Err(AstBuildError::malformed(
            None,
            format!(
                "{} cannot be updated from the bare value `{primitive}`",
                Self::TARGET,
            ),
        ))
    }
}

/// A concrete (single-kind) node.
pub trait AstNode: Sized {
    const KIND: NodeKind;

    /// Lowers a bare primitive into the object props it stands for.
    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        Err(AstBuildError::malformed(
            Some(Self::KIND),
            format!("cannot build from the bare value `{primitive}`"),
        ))
    }

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        Self::shorthand(primitive.clone())
    }

    fn from_props(props: PropsObject) -> Result<Self>;
}

/// Builds a node of type `N` from any accepted props.
pub fn build<N: Buildable>(props: impl Into<Props<N>>) -> Result<N> {
    build_props(props.into())
}

/// [`build`] over already-converted [`Props`]; usable as a plain function
/// pointer where a constructor is injected.
pub fn build_props<N: Buildable>(props: Props<N>) -> Result<N> {
    match props {
        Props::Node(node) => Ok(node),
        Props::Raw(raw) => N::build_from_value(raw),
    }
}

/// Shared three-way dispatch for concrete nodes: objects are checked against
/// the expected `kind` tag (when they carry one) and handed to
/// `from_props`; primitives go through the kind's shorthand first.
pub(crate) fn build_node<N: AstNode>(raw: Value) -> Result<N> {
    let fields = match raw {
        Value::Object(fields) => {
            match fields.get("kind") {
                None | Some(Value::Null) => (),
                Some(Value::String(tag)) => {
                    let kind = NodeKind::from_tag(tag).ok_or_else(|| {
                        AstBuildError::UnknownKind {
                            kind: tag.to_string(),
                            table: N::KIND.as_str(),
                        }
                    })?;
                    if kind != N::KIND {
                        return Err(AstBuildError::KindMismatch {
                            expected: N::KIND,
                            actual: kind,
                        });
                    }
                },
                Some(other) => return Err(AstBuildError::malformed(
                    Some(N::KIND),
                    format!("`kind` must be a string tag, found `{other}`"),
                )),
            }
            fields
        },
        primitive => N::shorthand(primitive)?,
    };
    N::from_props(PropsObject::new(N::KIND, fields))
}

/// Reads the `kind` tag of an object-shaped props value, if any.
pub(crate) fn kind_tag(raw: &Value) -> Option<&str> {
    raw.as_object()
        .and_then(|fields| fields.get("kind"))
        .and_then(Value::as_str)
}

pub(crate) fn single_field(key: &str, value: Value) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(key.to_string(), value);
    fields
}

/// `"x"` => `{ name: "x" }`
pub(crate) fn name_shorthand(
    kind: NodeKind,
    primitive: Value,
) -> Result<Map<String, Value>> {
    match primitive {
        Value::String(_) => Ok(single_field("name", primitive)),
        other => Err(AstBuildError::malformed(
            Some(kind),
            format!("expected a name string, found `{other}`"),
        )),
    }
}

/// `"id: ID!"` => `{ <name_key>: "id", type: "ID!" }`. A bare `"id"` takes
/// `default_type` when one is given and fails otherwise.
pub(crate) fn typed_name_shorthand(
    kind: NodeKind,
    primitive: Value,
    name_key: &str,
    default_type: Option<&str>,
) -> Result<Map<String, Value>> {
    let src = match primitive {
        Value::String(src) => src,
        other => return Err(AstBuildError::malformed(
            Some(kind),
            format!("expected `name: Type`, found `{other}`"),
        )),
    };
    let (name, type_ref) = match src.split_once(':') {
        Some((name, type_ref)) => (name.trim(), Some(type_ref.trim())),
        None => (src.trim(), default_type),
    };
    let type_ref = type_ref.ok_or_else(|| AstBuildError::malformed(
        Some(kind),
        format!("`{src}` does not name a type"),
    ))?;
    let mut fields = single_field(name_key, Value::String(name.to_string()));
    fields.insert("type".to_string(), Value::String(type_ref.to_string()));
    Ok(fields)
}

macro_rules! concrete_constructors {
    ($($(#[$meta:meta])* $ctor:ident => $node:ty),* $(,)?) => {$(
        impl $crate::build::Buildable for $node {
            const TARGET: &'static str = <$node as $crate::build::AstNode>::KIND.as_str();

            fn build_from_value(
                raw: serde_json::Value,
            ) -> std::result::Result<Self, $crate::AstBuildError> {
                $crate::build::build_node::<$node>(raw)
            }

            fn partial_shorthand(
                primitive: &serde_json::Value,
            ) -> std::result::Result<
                serde_json::Map<String, serde_json::Value>,
                $crate::AstBuildError,
            > {
                <$node as $crate::build::AstNode>::partial_shorthand(primitive)
            }
        }

        $(#[$meta])*
        pub fn $ctor(
            props: impl Into<$crate::build::Props<$node>>,
        ) -> std::result::Result<$node, $crate::AstBuildError> {
            $crate::build::build(props)
        }
    )*};
}
pub(crate) use concrete_constructors;

#[cfg(test)]
mod tests;
