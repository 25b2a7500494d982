use crate::ast::BooleanValueNode;
use crate::ast::EnumValueNode;
use crate::ast::FloatValueNode;
use crate::ast::IntValueNode;
use crate::ast::ListValueNode;
use crate::ast::NullValueNode;
use crate::ast::ObjectFieldNode;
use crate::ast::ObjectValueNode;
use crate::ast::StringValueNode;
use crate::build::coerce;
use crate::build::concrete_constructors;
use crate::build::name_shorthand;
use crate::build::single_field;
use crate::build::AstNode;
use crate::build::PropsObject;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

concrete_constructors! {
    /// `42`, `"42"` or `{ value: 42 }`; stores `String(parseInt(value))`.
    int_value_node => IntValueNode,
    /// `1.5`, `"1.5"` or `{ value: 1.5 }`; stores `String(parseFloat(value))`.
    float_value_node => FloatValueNode,
    /// `"text"` or `{ value: "text", block: true }`
    string_value_node => StringValueNode,
    /// `true`, `"false"` or `{ value: true }`. Unrecognized inputs fall back
    /// to truthiness.
    boolean_value_node => BooleanValueNode,
    null_value_node => NullValueNode,
    /// `"ADMIN"` or `{ value: "ADMIN" }`
    enum_value_node => EnumValueNode,
    /// `[1, "two", null]` or `{ values: [...] }`
    list_value_node => ListValueNode,
    /// `{ fields: [{ name: "a", value: 1 }] }`
    object_value_node => ObjectValueNode,
    /// `{ name: "a", value: 1 }`
    object_field_node => ObjectFieldNode,
}

fn value_shorthand(primitive: Value) -> Result<Map<String, Value>> {
    Ok(single_field("value", primitive))
}

fn required_raw(props: &mut PropsObject, key: &str) -> Result<Value> {
    props.take(key).ok_or_else(|| AstBuildError::malformed(
        Some(props.kind()),
        format!("missing required field `{key}`"),
    ))
}

impl AstNode for IntValueNode {
    const KIND: NodeKind = NodeKind::IntValue;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        value_shorthand(primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let raw = required_raw(&mut props, "value")?;
        Ok(Self {
            value: coerce::parse_int_literal(&raw),
        })
    }
}

impl AstNode for FloatValueNode {
    const KIND: NodeKind = NodeKind::FloatValue;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        value_shorthand(primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let raw = required_raw(&mut props, "value")?;
        Ok(Self {
            value: coerce::parse_float_literal(&raw),
        })
    }
}

impl AstNode for StringValueNode {
    const KIND: NodeKind = NodeKind::StringValue;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        value_shorthand(primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let value = match required_raw(&mut props, "value")? {
            Value::String(s) => s,
            other => coerce::stringify(&other),
        };
        Ok(Self {
            value,
            block: props.flag("block")?,
        })
    }
}

impl AstNode for BooleanValueNode {
    const KIND: NodeKind = NodeKind::BooleanValue;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        value_shorthand(primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let value = match props.take("value") {
            Some(raw) => coerce::coerce_boolean(&raw),
            None => false,
        };
        Ok(Self { value })
    }
}

impl AstNode for NullValueNode {
    const KIND: NodeKind = NodeKind::NullValue;

    fn shorthand(_primitive: Value) -> Result<Map<String, Value>> {
        Ok(Map::new())
    }

    fn from_props(_props: PropsObject) -> Result<Self> {
        Ok(Self {})
    }
}

impl AstNode for EnumValueNode {
    const KIND: NodeKind = NodeKind::EnumValue;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        value_shorthand(primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            value: props.required_string("value")?,
        })
    }
}

impl AstNode for ListValueNode {
    const KIND: NodeKind = NodeKind::ListValue;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        Ok(single_field("values", primitive))
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            values: props.list("values")?,
        })
    }
}

impl AstNode for ObjectValueNode {
    const KIND: NodeKind = NodeKind::ObjectValue;

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            fields: props.list("fields")?,
        })
    }
}

impl AstNode for ObjectFieldNode {
    const KIND: NodeKind = NodeKind::ObjectField;

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive.clone())
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            name: props.required("name")?,
            value: props.required_nullable("value")?,
        })
    }
}
