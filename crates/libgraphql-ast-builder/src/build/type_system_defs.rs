use crate::ast::DirectiveDefinitionNode;
use crate::ast::DocumentNode;
use crate::ast::EnumTypeDefinitionNode;
use crate::ast::EnumValueDefinitionNode;
use crate::ast::FieldDefinitionNode;
use crate::ast::InputObjectTypeDefinitionNode;
use crate::ast::InputValueDefinitionNode;
use crate::ast::InterfaceTypeDefinitionNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinitionNode;
use crate::ast::ScalarTypeDefinitionNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::UnionTypeDefinitionNode;
use crate::build::concrete_constructors;
use crate::build::name_shorthand;
use crate::build::single_field;
use crate::build::typed_name_shorthand;
use crate::build::AstNode;
use crate::build::PropsObject;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Type used for a field or input value given by bare name alone.
pub(crate) const DEFAULT_FIELD_TYPE: &str = "String";

concrete_constructors! {
    /// `{ description, directives, operationTypes }`
    schema_definition_node => SchemaDefinitionNode,
    /// `"query"` (rooted at `Query`), `"query: RootQuery"` or
    /// `{ operation, type }`
    operation_type_definition_node => OperationTypeDefinitionNode,
    /// `"auth"` or `{ name, description, arguments, repeatable, locations }`
    directive_definition_node => DirectiveDefinitionNode,
    scalar_type_definition_node => ScalarTypeDefinitionNode,
    /// `"User"` or `{ name, description, interfaces, directives, fields }`
    object_type_definition_node => ObjectTypeDefinitionNode,
    interface_type_definition_node => InterfaceTypeDefinitionNode,
    /// `"SearchResult"` or `{ name, types: ["User", "Post"] }`
    union_type_definition_node => UnionTypeDefinitionNode,
    /// `"Role"` or `{ name, values: ["ADMIN", "USER"] }`
    enum_type_definition_node => EnumTypeDefinitionNode,
    input_object_type_definition_node => InputObjectTypeDefinitionNode,
    /// `"id: ID!"`, `"nickname"` (typed `String`) or
    /// `{ name, type, arguments, description, directives }`
    field_definition_node => FieldDefinitionNode,
    /// `"limit: Int"`, `"filter"` (typed `String`) or
    /// `{ name, type, defaultValue, description, directives }`
    input_value_definition_node => InputValueDefinitionNode,
    enum_value_definition_node => EnumValueDefinitionNode,
    /// `[definition, ...]` or `{ definitions: [...] }`
    document_node => DocumentNode,
}

/// A bare string used as a partial update of a typed member renames it,
/// unless it spells out `name: Type`.
fn typed_member_partial(kind: NodeKind, primitive: &Value) -> Result<Map<String, Value>> {
    match primitive {
        Value::String(src) if src.contains(':') => {
            typed_name_shorthand(kind, primitive.clone(), "name", None)
        },
        _ => name_shorthand(kind, primitive.clone()),
    }
}

// =============================================================================
// Schema & directive definitions
// =============================================================================

impl AstNode for SchemaDefinitionNode {
    const KIND: NodeKind = NodeKind::SchemaDefinition;

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            directives: props.list("directives")?,
            operation_types: props.list("operationTypes")?,
        })
    }
}

impl AstNode for OperationTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::OperationTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        let src = match primitive {
            Value::String(src) => src,
            other => return Err(AstBuildError::malformed(
                Some(Self::KIND),
                format!("expected `operation: Type`, found `{other}`"),
            )),
        };
        let (operation, type_name) = match src.split_once(':') {
            Some((operation, type_name)) => (operation.trim(), Some(type_name.trim())),
            None => (src.trim(), None),
        };
        let op = OperationType::from_name(operation).ok_or_else(|| {
            AstBuildError::malformed(
                Some(Self::KIND),
                format!("`{operation}` is not an operation type"),
            )
        })?;
        let type_name = type_name.unwrap_or(op.default_root_typename());
        let mut fields = single_field("operation", Value::String(op.as_str().to_string()));
        fields.insert("type".to_string(), Value::String(type_name.to_string()));
        Ok(fields)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        let operation = props.required_operation("operation")?;
        let type_ = match props.optional("type")? {
            Some(named) => named,
            None => crate::build::named_type_node(operation.default_root_typename())?,
        };
        Ok(Self { operation, type_ })
    }
}

impl AstNode for DirectiveDefinitionNode {
    const KIND: NodeKind = NodeKind::DirectiveDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            arguments: props.list("arguments")?,
            repeatable: props.flag("repeatable")?.unwrap_or(false),
            locations: props.list("locations")?,
        })
    }
}

// =============================================================================
// Type definitions
// =============================================================================

impl AstNode for ScalarTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::ScalarTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            directives: props.list("directives")?,
        })
    }
}

impl AstNode for ObjectTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::ObjectTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            interfaces: props.list("interfaces")?,
            directives: props.list("directives")?,
            fields: props.list("fields")?,
        })
    }
}

impl AstNode for InterfaceTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::InterfaceTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            interfaces: props.list("interfaces")?,
            directives: props.list("directives")?,
            fields: props.list("fields")?,
        })
    }
}

impl AstNode for UnionTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::UnionTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            directives: props.list("directives")?,
            types: props.list("types")?,
        })
    }
}

impl AstNode for EnumTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::EnumTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            directives: props.list("directives")?,
            values: props.list("values")?,
        })
    }
}

impl AstNode for InputObjectTypeDefinitionNode {
    const KIND: NodeKind = NodeKind::InputObjectTypeDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            directives: props.list("directives")?,
            fields: props.list("fields")?,
        })
    }
}

// =============================================================================
// Members of type definitions
// =============================================================================

impl AstNode for FieldDefinitionNode {
    const KIND: NodeKind = NodeKind::FieldDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        typed_name_shorthand(Self::KIND, primitive, "name", Some(DEFAULT_FIELD_TYPE))
    }

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        typed_member_partial(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            arguments: props.list("arguments")?,
            type_: props.required("type")?,
            directives: props.list("directives")?,
        })
    }
}

impl AstNode for InputValueDefinitionNode {
    const KIND: NodeKind = NodeKind::InputValueDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        typed_name_shorthand(Self::KIND, primitive, "name", Some(DEFAULT_FIELD_TYPE))
    }

    fn partial_shorthand(primitive: &Value) -> Result<Map<String, Value>> {
        typed_member_partial(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            type_: props.required("type")?,
            default_value: props.optional("defaultValue")?,
            directives: props.list("directives")?,
        })
    }
}

impl AstNode for EnumValueDefinitionNode {
    const KIND: NodeKind = NodeKind::EnumValueDefinition;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        name_shorthand(Self::KIND, primitive)
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            description: props.optional("description")?,
            name: props.required("name")?,
            directives: props.list("directives")?,
        })
    }
}

impl AstNode for DocumentNode {
    const KIND: NodeKind = NodeKind::Document;

    fn shorthand(primitive: Value) -> Result<Map<String, Value>> {
        Ok(single_field("definitions", primitive))
    }

    fn from_props(mut props: PropsObject) -> Result<Self> {
        Ok(Self {
            definitions: props.list("definitions")?,
        })
    }
}
