use crate::ast::NameNode;
use crate::ast::NamedTypeNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::OperationType;
use crate::build::object_type_definition_node;
use crate::build::Props;
use crate::AstBuildError;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

/// An object type named `Query` unless `props` name it otherwise.
pub fn query_type(
    props: impl Into<Props<ObjectTypeDefinitionNode>>,
) -> Result<ObjectTypeDefinitionNode> {
    root_type(OperationType::Query, props.into())
}

/// An object type named `Mutation` unless `props` name it otherwise.
pub fn mutation_type(
    props: impl Into<Props<ObjectTypeDefinitionNode>>,
) -> Result<ObjectTypeDefinitionNode> {
    root_type(OperationType::Mutation, props.into())
}

/// An object type named `Subscription` unless `props` name it otherwise.
pub fn subscription_type(
    props: impl Into<Props<ObjectTypeDefinitionNode>>,
) -> Result<ObjectTypeDefinitionNode> {
    root_type(OperationType::Subscription, props.into())
}

fn root_type(
    operation: OperationType,
    props: Props<ObjectTypeDefinitionNode>,
) -> Result<ObjectTypeDefinitionNode> {
    let default_name = Value::String(operation.default_root_typename().to_string());
    let props = match props {
        Props::Raw(Value::Null) => Props::Raw(default_name),
        Props::Raw(Value::Object(mut fields)) => {
            if fields.get("name").is_none_or(Value::is_null) {
                fields.insert("name".to_string(), default_name);
            }
            Props::Raw(Value::Object(fields))
        },
        other => other,
    };
    object_type_definition_node(props)
}

fn builtin(name: &str) -> NamedTypeNode {
    NamedTypeNode {
        name: NameNode {
            value: name.to_string(),
        },
    }
}

pub fn id() -> NamedTypeNode {
    builtin("ID")
}

pub fn int() -> NamedTypeNode {
    builtin("Int")
}

pub fn float() -> NamedTypeNode {
    builtin("Float")
}

pub fn boolean() -> NamedTypeNode {
    builtin("Boolean")
}

pub fn string() -> NamedTypeNode {
    builtin("String")
}
