use crate::ast::OperationType;
use crate::build::Buildable;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Input accepted by every node constructor.
///
/// `Raw` props are either a bare primitive (interpreted per kind, usually as
/// the node's name), a partial object whose fields are themselves props or
/// canonical child nodes, or the canonical JSON of a node. `Node` props are
/// an already-built node of the exact target type and are returned as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum Props<N> {
    Node(N),
    Raw(Value),
}
impl<N> Props<N> {
    pub fn raw(value: impl Into<Value>) -> Self {
        Self::Raw(value.into())
    }

    /// Lifts already-built node props into props of an enclosing union;
    /// raw props pass through untouched.
    pub fn map<M>(self, lift: impl FnOnce(N) -> M) -> Props<M> {
        match self {
            Self::Node(node) => Props::Node(lift(node)),
            Self::Raw(raw) => Props::Raw(raw),
        }
    }
}
impl<N> std::convert::From<Value> for Props<N> {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}
impl<N> std::convert::From<&str> for Props<N> {
    fn from(value: &str) -> Self {
        Self::Raw(Value::String(value.to_string()))
    }
}
impl<N> std::convert::From<String> for Props<N> {
    fn from(value: String) -> Self {
        Self::Raw(Value::String(value))
    }
}
impl<N> std::convert::From<&String> for Props<N> {
    fn from(value: &String) -> Self {
        Self::Raw(Value::String(value.clone()))
    }
}
impl<N> std::convert::From<bool> for Props<N> {
    fn from(value: bool) -> Self {
        Self::Raw(Value::Bool(value))
    }
}
impl<N> std::convert::From<i32> for Props<N> {
    fn from(value: i32) -> Self {
        Self::Raw(Value::from(value))
    }
}
impl<N> std::convert::From<i64> for Props<N> {
    fn from(value: i64) -> Self {
        Self::Raw(Value::from(value))
    }
}
impl<N> std::convert::From<f64> for Props<N> {
    fn from(value: f64) -> Self {
        Self::Raw(Value::from(value))
    }
}

/// The fields of an object-shaped props value, consumed field-by-field by a
/// node's `from_props` implementation.
///
/// `null` and absent fields are treated alike (as "not provided"). The
/// `kind` tag is stripped on construction.
#[derive(Clone, Debug)]
pub struct PropsObject {
    kind: NodeKind,
    fields: Map<String, Value>,
}
impl PropsObject {
    pub fn new(kind: NodeKind, mut fields: Map<String, Value>) -> Self {
        fields.remove("kind");
        Self { kind, fields }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|value| !value.is_null())
    }

    /// Removes and returns the raw value at `key`, if provided.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn required<N: Buildable>(&mut self, key: &str) -> Result<N> {
        let raw = self.take(key).ok_or_else(|| self.missing(key))?;
        N::build_from_value(raw)
    }

    /// Like [`required`](Self::required), but an explicit `null` is handed
    /// to the builder instead of being treated as absent.
    pub fn required_nullable<N: Buildable>(&mut self, key: &str) -> Result<N> {
        let raw = self.fields.remove(key).ok_or_else(|| self.missing(key))?;
        N::build_from_value(raw)
    }

    pub fn optional<N: Buildable>(&mut self, key: &str) -> Result<Option<N>> {
        self.take(key)
            .map(N::build_from_value)
            .transpose()
    }

    /// Builds a collection field element-wise. Absent input yields an empty
    /// collection; a single non-array value is lifted into a one-element
    /// collection.
    pub fn list<N: Buildable>(&mut self, key: &str) -> Result<Vec<N>> {
        match self.take(key) {
            None => Ok(vec![]),
            Some(Value::Array(items)) => {
                items.into_iter()
                    .map(N::build_from_value)
                    .collect()
            },
            Some(single) => Ok(vec![N::build_from_value(single)?]),
        }
    }

    pub fn string(&mut self, key: &str) -> Result<Option<String>> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.wrong_type(key, "a string", &other)),
        }
    }

    pub fn required_string(&mut self, key: &str) -> Result<String> {
        self.string(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn flag(&mut self, key: &str) -> Result<Option<bool>> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(self.wrong_type(key, "a boolean", &other)),
        }
    }

    pub fn operation(&mut self, key: &str) -> Result<Option<OperationType>> {
        match self.take(key) {
            None => Ok(None),
            Some(Value::String(s)) => match OperationType::from_name(&s) {
                Some(op) => Ok(Some(op)),
                None => Err(AstBuildError::malformed(
                    Some(self.kind),
                    format!("`{s}` is not an operation type"),
                )),
            },
            Some(other) => Err(self.wrong_type(key, "an operation type name", &other)),
        }
    }

    pub fn required_operation(&mut self, key: &str) -> Result<OperationType> {
        self.operation(key)?.ok_or_else(|| self.missing(key))
    }

    fn missing(&self, key: &str) -> AstBuildError {
        AstBuildError::malformed(
            Some(self.kind),
            format!("missing required field `{key}`"),
        )
    }

    fn wrong_type(&self, key: &str, expected: &str, found: &Value) -> AstBuildError {
        AstBuildError::malformed(
            Some(self.kind),
            format!("expected `{key}` to be {expected}, found `{found}`"),
        )
    }
}
