use crate::ast::ArgumentNode;
use crate::ast::BooleanValueNode;
use crate::ast::DirectiveNode;
use crate::ast::EnumValueNode;
use crate::ast::FloatValueNode;
use crate::ast::IntValueNode;
use crate::ast::ListValueNode;
use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::NullValueNode;
use crate::ast::ObjectFieldNode;
use crate::ast::ObjectValueNode;
use crate::ast::StringValueNode;
use crate::ast::TypeNode;
use crate::ast::ValueNode;
use crate::ast::VariableNode;
use crate::build::coerce::format_number;
use crate::graphql_parser_ast;
use crate::AstBuildError;
use crate::NodeKind;

type Result<T> = std::result::Result<T, AstBuildError>;

pub(super) fn name(value: String) -> NameNode {
    NameNode { value }
}

pub(super) fn named_type(value: String) -> NamedTypeNode {
    NamedTypeNode { name: name(value) }
}

pub(super) fn description(value: Option<String>) -> Option<StringValueNode> {
    value.map(|value| StringValueNode { value, block: None })
}

pub fn type_from_graphql_parser(type_: graphql_parser_ast::Type) -> TypeNode {
    match type_ {
        graphql_parser_ast::Type::NamedType(typename) => TypeNode::Named(named_type(typename)),
        graphql_parser_ast::Type::ListType(inner) => {
            type_from_graphql_parser(*inner).into_list()
        },
        graphql_parser_ast::Type::NonNullType(inner) => {
            type_from_graphql_parser(*inner).into_non_null()
        },
    }
}

pub fn value_from_graphql_parser(value: graphql_parser_ast::Value) -> Result<ValueNode> {
    Ok(match value {
        graphql_parser_ast::Value::Variable(var_name) => ValueNode::Variable(VariableNode {
            name: name(var_name),
        }),
        graphql_parser_ast::Value::Int(number) => {
            let int = number.as_i64().ok_or_else(|| AstBuildError::malformed(
                Some(NodeKind::IntValue),
                "integer literal out of range",
            ))?;
            ValueNode::Int(IntValueNode {
                value: int.to_string(),
            })
        },
        graphql_parser_ast::Value::Float(float) => ValueNode::Float(FloatValueNode {
            value: format_number(float),
        }),
        graphql_parser_ast::Value::String(value) => ValueNode::String(StringValueNode {
            value,
            block: None,
        }),
        graphql_parser_ast::Value::Boolean(value) => {
            ValueNode::Boolean(BooleanValueNode { value })
        },
        graphql_parser_ast::Value::Null => ValueNode::Null(NullValueNode {}),
        graphql_parser_ast::Value::Enum(value) => ValueNode::Enum(EnumValueNode { value }),
        graphql_parser_ast::Value::List(values) => ValueNode::List(ListValueNode {
            values: values.into_iter()
                .map(value_from_graphql_parser)
                .collect::<Result<_>>()?,
        }),
        graphql_parser_ast::Value::Object(fields) => ValueNode::Object(ObjectValueNode {
            fields: fields.into_iter()
                .map(|(field_name, value)| Ok(ObjectFieldNode {
                    name: name(field_name),
                    value: value_from_graphql_parser(value)?,
                }))
                .collect::<Result<_>>()?,
        }),
    })
}

pub(super) fn arguments(
    arguments: Vec<(String, graphql_parser_ast::Value)>,
) -> Result<Vec<ArgumentNode>> {
    arguments.into_iter()
        .map(|(arg_name, value)| Ok(ArgumentNode {
            name: name(arg_name),
            value: value_from_graphql_parser(value)?,
        }))
        .collect()
}

pub(super) fn directives(
    directives: Vec<graphql_parser_ast::Directive>,
) -> Result<Vec<DirectiveNode>> {
    directives.into_iter()
        .map(|directive| Ok(DirectiveNode {
            name: name(directive.name),
            arguments: arguments(directive.arguments)?,
        }))
        .collect()
}

