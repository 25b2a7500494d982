use crate::ast::NameNode;
use crate::ast::VariableNode;

/// Integer literal. The stored text is the normalized (re-parsed) form of
/// whatever the node was built from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "IntValue")]
pub struct IntValueNode {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "FloatValue")]
pub struct FloatValueNode {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "StringValue")]
pub struct StringValueNode {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "BooleanValue")]
pub struct BooleanValueNode {
    pub value: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "NullValue")]
pub struct NullValueNode {}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "EnumValue")]
pub struct EnumValueNode {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ListValue")]
pub struct ListValueNode {
    pub values: Vec<ValueNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ObjectValue")]
pub struct ObjectValueNode {
    pub fields: Vec<ObjectFieldNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "ObjectField")]
pub struct ObjectFieldNode {
    pub name: NameNode,
    pub value: ValueNode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ValueNode {
    Variable(VariableNode),
    Int(IntValueNode),
    Float(FloatValueNode),
    String(StringValueNode),
    Boolean(BooleanValueNode),
    Null(NullValueNode),
    Enum(EnumValueNode),
    List(ListValueNode),
    Object(ObjectValueNode),
}
