use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::NamedTypeNode;
use crate::ast::OperationType;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::ast::TypeSystemExtensionNode;
use crate::graphql_parser_ast::no_pos;
use crate::graphql_parser_ast::schema;
use crate::print::shared::description;
use crate::print::shared::directives;
use crate::print::shared::type_;
use crate::print::shared::value;
use crate::AstBuildError;
use crate::NodeKind;
use std::str::FromStr;

type Result<T> = std::result::Result<T, AstBuildError>;

fn names(named_types: &[NamedTypeNode]) -> Vec<String> {
    named_types.iter()
        .map(|named| named.name.value.clone())
        .collect()
}

pub(super) fn definition(def: &TypeSystemDefinitionNode) -> Result<schema::Definition> {
    Ok(match def {
        TypeSystemDefinitionNode::Schema(schema_def) => {
            let root = |operation: OperationType| {
                schema_def.operation_types.iter()
                    .find(|op_type| op_type.operation == operation)
                    .map(|op_type| op_type.type_.name.value.clone())
            };
            schema::Definition::SchemaDefinition(schema::SchemaDefinition {
                position: no_pos(),
                directives: directives(&schema_def.directives)?,
                query: root(OperationType::Query),
                mutation: root(OperationType::Mutation),
                subscription: root(OperationType::Subscription),
            })
        },
        TypeSystemDefinitionNode::Type(type_def) => {
            schema::Definition::TypeDefinition(type_definition(type_def)?)
        },
        TypeSystemDefinitionNode::Directive(directive_def) => {
            let locations = directive_def.locations.iter()
                .map(|location| {
                    schema::DirectiveLocation::from_str(location.as_str()).map_err(|_| {
                        AstBuildError::malformed(
                            Some(NodeKind::DirectiveDefinition),
                            format!("`{}` is not a directive location", location.value),
                        )
                    })
                })
                .collect::<Result<_>>()?;
            schema::Definition::DirectiveDefinition(schema::DirectiveDefinition {
                position: no_pos(),
                description: description(&directive_def.description),
                name: directive_def.name.value.clone(),
                arguments: input_values(&directive_def.arguments)?,
                repeatable: directive_def.repeatable,
                locations,
            })
        },
    })
}

pub(super) fn extension(ext: &TypeSystemExtensionNode) -> Result<schema::Definition> {
    match ext {
        TypeSystemExtensionNode::Schema(_) => Err(AstBuildError::malformed(
            Some(NodeKind::SchemaExtension),
            "schema extensions cannot be printed",
        )),
        TypeSystemExtensionNode::Type(type_ext) => {
            Ok(schema::Definition::TypeExtension(type_extension(type_ext)?))
        },
    }
}

fn type_definition(type_def: &TypeDefinitionNode) -> Result<schema::TypeDefinition> {
    Ok(match type_def {
        TypeDefinitionNode::Scalar(scalar) => {
            schema::TypeDefinition::Scalar(schema::ScalarType {
                position: no_pos(),
                description: description(&scalar.description),
                name: scalar.name.value.clone(),
                directives: directives(&scalar.directives)?,
            })
        },
        TypeDefinitionNode::Object(object) => {
            schema::TypeDefinition::Object(schema::ObjectType {
                position: no_pos(),
                description: description(&object.description),
                name: object.name.value.clone(),
                implements_interfaces: names(&object.interfaces),
                directives: directives(&object.directives)?,
                fields: fields(&object.fields)?,
            })
        },
        TypeDefinitionNode::Interface(iface) => {
            schema::TypeDefinition::Interface(schema::InterfaceType {
                position: no_pos(),
                description: description(&iface.description),
                name: iface.name.value.clone(),
                implements_interfaces: names(&iface.interfaces),
                directives: directives(&iface.directives)?,
                fields: fields(&iface.fields)?,
            })
        },
        TypeDefinitionNode::Union(union) => {
            schema::TypeDefinition::Union(schema::UnionType {
                position: no_pos(),
                description: description(&union.description),
                name: union.name.value.clone(),
                directives: directives(&union.directives)?,
                types: names(&union.types),
            })
        },
        TypeDefinitionNode::Enum(enum_) => {
            schema::TypeDefinition::Enum(schema::EnumType {
                position: no_pos(),
                description: description(&enum_.description),
                name: enum_.name.value.clone(),
                directives: directives(&enum_.directives)?,
                values: enum_values(&enum_.values)?,
            })
        },
        TypeDefinitionNode::InputObject(input) => {
            schema::TypeDefinition::InputObject(schema::InputObjectType {
                position: no_pos(),
                description: description(&input.description),
                name: input.name.value.clone(),
                directives: directives(&input.directives)?,
                fields: input_values(&input.fields)?,
            })
        },
    })
}

fn type_extension(type_ext: &TypeExtensionNode) -> Result<schema::TypeExtension> {
    Ok(match type_ext {
        TypeExtensionNode::Scalar(scalar) => {
            schema::TypeExtension::Scalar(schema::ScalarTypeExtension {
                position: no_pos(),
                name: scalar.name.value.clone(),
                directives: directives(&scalar.directives)?,
            })
        },
        TypeExtensionNode::Object(object) => {
            schema::TypeExtension::Object(schema::ObjectTypeExtension {
                position: no_pos(),
                name: object.name.value.clone(),
                implements_interfaces: names(&object.interfaces),
                directives: directives(&object.directives)?,
                fields: fields(&object.fields)?,
            })
        },
        TypeExtensionNode::Interface(iface) => {
            schema::TypeExtension::Interface(schema::InterfaceTypeExtension {
                position: no_pos(),
                name: iface.name.value.clone(),
                implements_interfaces: names(&iface.interfaces),
                directives: directives(&iface.directives)?,
                fields: fields(&iface.fields)?,
            })
        },
        TypeExtensionNode::Union(union) => {
            schema::TypeExtension::Union(schema::UnionTypeExtension {
                position: no_pos(),
                name: union.name.value.clone(),
                directives: directives(&union.directives)?,
                types: names(&union.types),
            })
        },
        TypeExtensionNode::Enum(enum_) => {
            schema::TypeExtension::Enum(schema::EnumTypeExtension {
                position: no_pos(),
                name: enum_.name.value.clone(),
                directives: directives(&enum_.directives)?,
                values: enum_values(&enum_.values)?,
            })
        },
        TypeExtensionNode::InputObject(input) => {
            schema::TypeExtension::InputObject(schema::InputObjectTypeExtension {
                position: no_pos(),
                name: input.name.value.clone(),
                directives: directives(&input.directives)?,
                fields: input_values(&input.fields)?,
            })
        },
    })
}

fn fields(fields: &[FieldDefinitionNode]) -> Result<Vec<schema::Field>> {
    fields.iter()
        .map(|field| Ok(schema::Field {
            position: no_pos(),
            description: description(&field.description),
            name: field.name.value.clone(),
            arguments: input_values(&field.arguments)?,
            field_type: type_(&field.type_),
            directives: directives(&field.directives)?,
        }))
        .collect()
}

fn input_values(input_values: &[InputValueDefinitionNode]) -> Result<Vec<schema::InputValue>> {
    input_values.iter()
        .map(|input_value| Ok(schema::InputValue {
            position: no_pos(),
            description: description(&input_value.description),
            name: input_value.name.value.clone(),
            value_type: type_(&input_value.type_),
            default_value: input_value.default_value
                .as_ref()
                .map(value)
                .transpose()?,
            directives: directives(&input_value.directives)?,
        }))
        .collect()
}

fn enum_values(values: &[EnumValueDefinitionNode]) -> Result<Vec<schema::EnumValue>> {
    values.iter()
        .map(|enum_value| Ok(schema::EnumValue {
            position: no_pos(),
            description: description(&enum_value.description),
            name: enum_value.name.value.clone(),
            directives: directives(&enum_value.directives)?,
        }))
        .collect()
}
