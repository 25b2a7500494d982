use crate::ast::DirectiveDefinitionNode;
use crate::ast::ExecutableDefinitionNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::ast::TypeSystemExtensionNode;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename = "Document")]
pub struct DocumentNode {
    pub definitions: Vec<DefinitionNode>,
}

/// Any top-level definition of a document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum DefinitionNode {
    Executable(ExecutableDefinitionNode),
    TypeSystem(TypeSystemDefinitionNode),
    TypeSystemExtension(TypeSystemExtensionNode),
}
impl DefinitionNode {
    /// The definition's name, when it has one. Schema definitions, schema
    /// extensions and anonymous operations have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Executable(ExecutableDefinitionNode::Operation(op)) => {
                op.name.as_ref().map(|name| name.as_str())
            },
            Self::Executable(ExecutableDefinitionNode::Fragment(frag)) => {
                Some(frag.name.as_str())
            },
            Self::TypeSystem(TypeSystemDefinitionNode::Schema(_)) => None,
            Self::TypeSystem(TypeSystemDefinitionNode::Type(type_def)) => {
                Some(type_def.name().as_str())
            },
            Self::TypeSystem(TypeSystemDefinitionNode::Directive(directive_def)) => {
                Some(directive_def.name.as_str())
            },
            Self::TypeSystemExtension(TypeSystemExtensionNode::Schema(_)) => None,
            Self::TypeSystemExtension(TypeSystemExtensionNode::Type(type_ext)) => {
                Some(type_ext.name().as_str())
            },
        }
    }

    pub fn as_type_definition(&self) -> Option<&TypeDefinitionNode> {
        match self {
            Self::TypeSystem(TypeSystemDefinitionNode::Type(type_def)) => Some(type_def),
            _ => None,
        }
    }

    pub fn as_type_definition_mut(&mut self) -> Option<&mut TypeDefinitionNode> {
        match self {
            Self::TypeSystem(TypeSystemDefinitionNode::Type(type_def)) => Some(type_def),
            _ => None,
        }
    }

    pub fn as_type_extension(&self) -> Option<&TypeExtensionNode> {
        match self {
            Self::TypeSystemExtension(TypeSystemExtensionNode::Type(type_ext)) => {
                Some(type_ext)
            },
            _ => None,
        }
    }

    pub fn as_type_extension_mut(&mut self) -> Option<&mut TypeExtensionNode> {
        match self {
            Self::TypeSystemExtension(TypeSystemExtensionNode::Type(type_ext)) => {
                Some(type_ext)
            },
            _ => None,
        }
    }

    pub fn as_schema_definition(&self) -> Option<&SchemaDefinitionNode> {
        match self {
            Self::TypeSystem(TypeSystemDefinitionNode::Schema(schema_def)) => Some(schema_def),
            _ => None,
        }
    }

    pub fn as_schema_definition_mut(&mut self) -> Option<&mut SchemaDefinitionNode> {
        match self {
            Self::TypeSystem(TypeSystemDefinitionNode::Schema(schema_def)) => Some(schema_def),
            _ => None,
        }
    }

    pub fn as_directive_definition(&self) -> Option<&DirectiveDefinitionNode> {
        match self {
            Self::TypeSystem(TypeSystemDefinitionNode::Directive(directive_def)) => {
                Some(directive_def)
            },
            _ => None,
        }
    }

    pub fn as_directive_definition_mut(&mut self) -> Option<&mut DirectiveDefinitionNode> {
        match self {
            Self::TypeSystem(TypeSystemDefinitionNode::Directive(directive_def)) => {
                Some(directive_def)
            },
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&OperationDefinitionNode> {
        match self {
            Self::Executable(ExecutableDefinitionNode::Operation(op)) => Some(op),
            _ => None,
        }
    }

    pub fn as_operation_mut(&mut self) -> Option<&mut OperationDefinitionNode> {
        match self {
            Self::Executable(ExecutableDefinitionNode::Operation(op)) => Some(op),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&FragmentDefinitionNode> {
        match self {
            Self::Executable(ExecutableDefinitionNode::Fragment(frag)) => Some(frag),
            _ => None,
        }
    }

    pub fn as_fragment_mut(&mut self) -> Option<&mut FragmentDefinitionNode> {
        match self {
            Self::Executable(ExecutableDefinitionNode::Fragment(frag)) => Some(frag),
            _ => None,
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Executable(_))
    }
}
impl std::convert::From<TypeDefinitionNode> for DefinitionNode {
    fn from(value: TypeDefinitionNode) -> Self {
        Self::TypeSystem(TypeSystemDefinitionNode::Type(value))
    }
}
impl std::convert::From<TypeExtensionNode> for DefinitionNode {
    fn from(value: TypeExtensionNode) -> Self {
        Self::TypeSystemExtension(TypeSystemExtensionNode::Type(value))
    }
}
impl std::convert::From<ExecutableDefinitionNode> for DefinitionNode {
    fn from(value: ExecutableDefinitionNode) -> Self {
        Self::Executable(value)
    }
}
impl std::convert::From<TypeSystemDefinitionNode> for DefinitionNode {
    fn from(value: TypeSystemDefinitionNode) -> Self {
        Self::TypeSystem(value)
    }
}
impl std::convert::From<TypeSystemExtensionNode> for DefinitionNode {
    fn from(value: TypeSystemExtensionNode) -> Self {
        Self::TypeSystemExtension(value)
    }
}
