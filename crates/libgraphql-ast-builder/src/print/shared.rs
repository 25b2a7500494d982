use crate::ast::ArgumentNode;
use crate::ast::DirectiveNode;
use crate::ast::NullableTypeNode;
use crate::ast::StringValueNode;
use crate::ast::TypeNode;
use crate::ast::ValueNode;
use crate::graphql_parser_ast::no_pos;
use crate::graphql_parser_ast::Directive;
use crate::graphql_parser_ast::Number;
use crate::graphql_parser_ast::Type;
use crate::graphql_parser_ast::Value;
use crate::AstBuildError;
use crate::NodeKind;
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, AstBuildError>;

pub(super) fn description(description: &Option<StringValueNode>) -> Option<String> {
    description.as_ref().map(|description| description.value.clone())
}

pub(super) fn type_(type_: &TypeNode) -> Type {
    match type_ {
        TypeNode::Named(named) => Type::NamedType(named.name.value.clone()),
        TypeNode::List(list) => Type::ListType(Box::new(self::type_(&list.type_))),
        TypeNode::NonNull(non_null) => {
            let inner = match &non_null.type_ {
                NullableTypeNode::Named(named) => Type::NamedType(named.name.value.clone()),
                NullableTypeNode::List(list) => {
                    Type::ListType(Box::new(self::type_(&list.type_)))
                },
            };
            Type::NonNullType(Box::new(inner))
        },
    }
}

/// Int literals must fit the printer's 32-bit integers; float literals are
/// re-read from their stored text.
pub(super) fn value(value: &ValueNode) -> Result<Value> {
    Ok(match value {
        ValueNode::Variable(var) => Value::Variable(var.name.value.clone()),
        ValueNode::Int(int) => {
            let parsed = int.value.parse::<i32>().map_err(|_| AstBuildError::malformed(
                Some(NodeKind::IntValue),
                format!("`{}` does not fit a 32-bit integer", int.value),
            ))?;
            Value::Int(Number::from(parsed))
        },
        ValueNode::Float(float) => {
            let parsed = float.value.parse::<f64>().map_err(|_| AstBuildError::malformed(
                Some(NodeKind::FloatValue),
                format!("`{}` is not a float literal", float.value),
            ))?;
            Value::Float(parsed)
        },
        ValueNode::String(string) => Value::String(string.value.clone()),
        ValueNode::Boolean(boolean) => Value::Boolean(boolean.value),
        ValueNode::Null(_) => Value::Null,
        ValueNode::Enum(enum_value) => Value::Enum(enum_value.value.clone()),
        ValueNode::List(list) => Value::List(
            list.values.iter()
                .map(self::value)
                .collect::<Result<_>>()?,
        ),
        ValueNode::Object(object) => Value::Object(
            object.fields.iter()
                .map(|field| Ok((field.name.value.clone(), self::value(&field.value)?)))
                .collect::<Result<BTreeMap<_, _>>>()?,
        ),
    })
}

pub(super) fn arguments(arguments: &[ArgumentNode]) -> Result<Vec<(String, Value)>> {
    arguments.iter()
        .map(|argument| Ok((argument.name.value.clone(), value(&argument.value)?)))
        .collect()
}

pub(super) fn directives(directives: &[DirectiveNode]) -> Result<Vec<Directive>> {
    directives.iter()
        .map(|directive| Ok(Directive {
            position: no_pos(),
            name: directive.name.value.clone(),
            arguments: arguments(&directive.arguments)?,
        }))
        .collect()
}
