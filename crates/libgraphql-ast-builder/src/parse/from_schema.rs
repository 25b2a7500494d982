use crate::ast::DefinitionNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::EnumTypeDefinitionNode;
use crate::ast::EnumTypeExtensionNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputObjectTypeDefinitionNode;
use crate::ast::InputObjectTypeExtensionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::InterfaceTypeDefinitionNode;
use crate::ast::InterfaceTypeExtensionNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::ObjectTypeExtensionNode;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinitionNode;
use crate::ast::ScalarTypeDefinitionNode;
use crate::ast::ScalarTypeExtensionNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::ast::UnionTypeDefinitionNode;
use crate::ast::UnionTypeExtensionNode;
use crate::graphql_parser_ast::schema;
use crate::parse::shared::description;
use crate::parse::shared::directives;
use crate::parse::shared::name;
use crate::parse::shared::named_type;
use crate::parse::shared::type_from_graphql_parser;
use crate::parse::shared::value_from_graphql_parser;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

pub(super) fn definitions(document: schema::Document) -> Result<Vec<DefinitionNode>> {
    document.definitions
        .into_iter()
        .map(definition)
        .collect()
}

fn definition(def: schema::Definition) -> Result<DefinitionNode> {
    Ok(match def {
        schema::Definition::SchemaDefinition(schema_def) => {
            TypeSystemDefinitionNode::Schema(schema_definition(schema_def)?).into()
        },
        schema::Definition::TypeDefinition(type_def) => type_definition(type_def)?.into(),
        schema::Definition::TypeExtension(type_ext) => type_extension(type_ext)?.into(),
        schema::Definition::DirectiveDefinition(directive_def) => {
            TypeSystemDefinitionNode::Directive(directive_definition(directive_def)?).into()
        },
    })
}

fn schema_definition(schema_def: schema::SchemaDefinition) -> Result<SchemaDefinitionNode> {
    let operation_types = [
        (OperationType::Query, schema_def.query),
        (OperationType::Mutation, schema_def.mutation),
        (OperationType::Subscription, schema_def.subscription),
    ].into_iter()
        .filter_map(|(operation, typename)| {
            typename.map(|typename| OperationTypeDefinitionNode {
                operation,
                type_: named_type(typename),
            })
        })
        .collect();

    Ok(SchemaDefinitionNode {
        description: None,
        directives: directives(schema_def.directives)?,
        operation_types,
    })
}

fn directive_definition(
    directive_def: schema::DirectiveDefinition,
) -> Result<DirectiveDefinitionNode> {
    Ok(DirectiveDefinitionNode {
        description: description(directive_def.description),
        name: name(directive_def.name),
        arguments: input_values(directive_def.arguments)?,
        repeatable: directive_def.repeatable,
        locations: directive_def.locations
            .iter()
            .map(|location| name(location.as_str().to_string()))
            .collect(),
    })
}

fn type_definition(type_def: schema::TypeDefinition) -> Result<TypeDefinitionNode> {
    Ok(match type_def {
        schema::TypeDefinition::Scalar(scalar) => {
            TypeDefinitionNode::Scalar(ScalarTypeDefinitionNode {
                description: description(scalar.description),
                name: name(scalar.name),
                directives: directives(scalar.directives)?,
            })
        },
        schema::TypeDefinition::Object(object) => {
            TypeDefinitionNode::Object(ObjectTypeDefinitionNode {
                description: description(object.description),
                name: name(object.name),
                interfaces: object.implements_interfaces.into_iter().map(named_type).collect(),
                directives: directives(object.directives)?,
                fields: fields(object.fields)?,
            })
        },
        schema::TypeDefinition::Interface(iface) => {
            TypeDefinitionNode::Interface(InterfaceTypeDefinitionNode {
                description: description(iface.description),
                name: name(iface.name),
                interfaces: iface.implements_interfaces.into_iter().map(named_type).collect(),
                directives: directives(iface.directives)?,
                fields: fields(iface.fields)?,
            })
        },
        schema::TypeDefinition::Union(union) => {
            TypeDefinitionNode::Union(UnionTypeDefinitionNode {
                description: description(union.description),
                name: name(union.name),
                directives: directives(union.directives)?,
                types: union.types.into_iter().map(named_type).collect(),
            })
        },
        schema::TypeDefinition::Enum(enum_) => {
            TypeDefinitionNode::Enum(EnumTypeDefinitionNode {
                description: description(enum_.description),
                name: name(enum_.name),
                directives: directives(enum_.directives)?,
                values: enum_values(enum_.values)?,
            })
        },
        schema::TypeDefinition::InputObject(input) => {
            TypeDefinitionNode::InputObject(InputObjectTypeDefinitionNode {
                description: description(input.description),
                name: name(input.name),
                directives: directives(input.directives)?,
                fields: input_values(input.fields)?,
            })
        },
    })
}

fn type_extension(type_ext: schema::TypeExtension) -> Result<TypeExtensionNode> {
    Ok(match type_ext {
        schema::TypeExtension::Scalar(scalar) => {
            TypeExtensionNode::Scalar(ScalarTypeExtensionNode {
                name: name(scalar.name),
                directives: directives(scalar.directives)?,
            })
        },
        schema::TypeExtension::Object(object) => {
            TypeExtensionNode::Object(ObjectTypeExtensionNode {
                name: name(object.name),
                interfaces: object.implements_interfaces.into_iter().map(named_type).collect(),
                directives: directives(object.directives)?,
                fields: fields(object.fields)?,
            })
        },
        schema::TypeExtension::Interface(iface) => {
            TypeExtensionNode::Interface(InterfaceTypeExtensionNode {
                name: name(iface.name),
                interfaces: iface.implements_interfaces.into_iter().map(named_type).collect(),
                directives: directives(iface.directives)?,
                fields: fields(iface.fields)?,
            })
        },
        schema::TypeExtension::Union(union) => {
            TypeExtensionNode::Union(UnionTypeExtensionNode {
                name: name(union.name),
                directives: directives(union.directives)?,
                types: union.types.into_iter().map(named_type).collect(),
            })
        },
        schema::TypeExtension::Enum(enum_) => {
            TypeExtensionNode::Enum(EnumTypeExtensionNode {
                name: name(enum_.name),
                directives: directives(enum_.directives)?,
                values: enum_values(enum_.values)?,
            })
        },
        schema::TypeExtension::InputObject(input) => {
            TypeExtensionNode::InputObject(InputObjectTypeExtensionNode {
                name: name(input.name),
                directives: directives(input.directives)?,
                fields: input_values(input.fields)?,
            })
        },
    })
}

fn fields(fields: Vec<schema::Field>) -> Result<Vec<FieldDefinitionNode>> {
    fields.into_iter()
        .map(|field| Ok(FieldDefinitionNode {
            description: description(field.description),
            name: name(field.name),
            arguments: input_values(field.arguments)?,
            type_: type_from_graphql_parser(field.field_type),
            directives: directives(field.directives)?,
        }))
        .collect()
}

fn input_values(input_values: Vec<schema::InputValue>) -> Result<Vec<InputValueDefinitionNode>> {
    input_values.into_iter()
        .map(|input_value| Ok(InputValueDefinitionNode {
            description: description(input_value.description),
            name: name(input_value.name),
            type_: type_from_graphql_parser(input_value.value_type),
            default_value: input_value.default_value
                .map(value_from_graphql_parser)
                .transpose()?,
            directives: directives(input_value.directives)?,
        }))
        .collect()
}

fn enum_values(values: Vec<schema::EnumValue>) -> Result<Vec<EnumValueDefinitionNode>> {
    values.into_iter()
        .map(|value| Ok(EnumValueDefinitionNode {
            description: description(value.description),
            name: name(value.name),
            directives: directives(value.directives)?,
        }))
        .collect()
}
