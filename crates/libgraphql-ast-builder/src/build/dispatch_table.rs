use crate::ast::BooleanValueNode;
use crate::ast::DefinitionNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::EnumTypeDefinitionNode;
use crate::ast::EnumTypeExtensionNode;
use crate::ast::EnumValueNode;
use crate::ast::ExecutableDefinitionNode;
use crate::ast::FieldNode;
use crate::ast::FloatValueNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::FragmentSpreadNode;
use crate::ast::InlineFragmentNode;
use crate::ast::InputObjectTypeDefinitionNode;
use crate::ast::InputObjectTypeExtensionNode;
use crate::ast::IntValueNode;
use crate::ast::InterfaceTypeDefinitionNode;
use crate::ast::InterfaceTypeExtensionNode;
use crate::ast::ListTypeNode;
use crate::ast::ListValueNode;
use crate::ast::NamedTypeNode;
use crate::ast::NonNullTypeNode;
use crate::ast::NullValueNode;
use crate::ast::ObjectTypeDefinitionNode;
use crate::ast::ObjectTypeExtensionNode;
use crate::ast::ObjectValueNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::ScalarTypeDefinitionNode;
use crate::ast::ScalarTypeExtensionNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::SchemaExtensionNode;
use crate::ast::SelectionNode;
use crate::ast::StringValueNode;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeExtensionNode;
use crate::ast::TypeNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::ast::TypeSystemExtensionNode;
use crate::ast::UnionTypeDefinitionNode;
use crate::ast::UnionTypeExtensionNode;
use crate::ast::ValueNode;
use crate::ast::VariableNode;
use crate::build::build_node;
use crate::build::kind_tag;
use crate::build::AstNode;
use crate::AstBuildError;
use crate::NodeKind;
use serde_json::Value;
use std::sync::Arc;
use std::sync::LazyLock;

type Result<T> = std::result::Result<T, AstBuildError>;

type Constructor<N> = Arc<dyn Fn(Value) -> Result<N> + Send + Sync>;

/// Maps a runtime `kind` tag to the constructor producing the matching
/// variant of the union node `N`.
///
/// Leaf tables register one concrete constructor per tag; higher-level
/// tables are derived by [`merge`](DispatchTable::merge)-ing lower-level
/// tables, so adding a kind to a leaf table propagates to every table built
/// from it.
pub struct DispatchTable<N> {
    name: &'static str,
    entries: Vec<(NodeKind, Constructor<N>)>,
}
impl<N: 'static> DispatchTable<N> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: vec![],
        }
    }

    /// Registers the constructor for the concrete node `L`, lifted into `N`.
    pub fn with_leaf<L: AstNode + 'static>(self, lift: fn(L) -> N) -> Self {
        let ctor: Constructor<N> = Arc::new(move |raw| build_node::<L>(raw).map(lift));
        self.with_entry(L::KIND, ctor)
    }

    /// Registers every entry of `other`, lifting its results into `N`.
    pub fn merge<M: 'static>(mut self, other: &DispatchTable<M>, lift: fn(M) -> N) -> Self {
        for (kind, inner) in &other.entries {
            let inner = Arc::clone(inner);
            let ctor: Constructor<N> = Arc::new(move |raw| inner(raw).map(lift));
            self = self.with_entry(*kind, ctor);
        }
        self
    }

    fn with_entry(mut self, kind: NodeKind, ctor: Constructor<N>) -> Self {
        assert!(
            self.get(kind).is_none(),
            "`{kind}` registered twice in the {} dispatch table",
            self.name,
        );
        self.entries.push((kind, ctor));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registered tags in registration order.
    pub fn kinds(&self) -> Vec<NodeKind> {
        self.entries.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.get(kind).is_some()
    }

    fn get(&self, kind: NodeKind) -> Option<&Constructor<N>> {
        self.entries.iter()
            .find(|(entry_kind, _)| *entry_kind == kind)
            .map(|(_, ctor)| ctor)
    }

    /// Builds from object props carrying a `kind` tag.
    pub fn build(&self, raw: Value) -> Result<N> {
        let tag = match kind_tag(&raw) {
            Some(tag) => tag.to_string(),
            None => return Err(AstBuildError::malformed(
                None,
                format!("{} props require a `kind` tag", self.name),
            )),
        };
        let ctor = NodeKind::from_tag(&tag)
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| AstBuildError::UnknownKind {
                kind: tag.clone(),
                table: self.name,
            })?;
        ctor(raw)
    }
}

// =============================================================================
// Leaf tables
// =============================================================================

pub static TYPE_TABLE: LazyLock<DispatchTable<TypeNode>> = LazyLock::new(|| {
    DispatchTable::new("Type")
        .with_leaf::<NamedTypeNode>(TypeNode::Named)
        .with_leaf::<ListTypeNode>(TypeNode::List)
        .with_leaf::<NonNullTypeNode>(TypeNode::NonNull)
});

pub static VALUE_TABLE: LazyLock<DispatchTable<ValueNode>> = LazyLock::new(|| {
    DispatchTable::new("Value")
        .with_leaf::<VariableNode>(ValueNode::Variable)
        .with_leaf::<IntValueNode>(ValueNode::Int)
        .with_leaf::<FloatValueNode>(ValueNode::Float)
        .with_leaf::<StringValueNode>(ValueNode::String)
        .with_leaf::<BooleanValueNode>(ValueNode::Boolean)
        .with_leaf::<NullValueNode>(ValueNode::Null)
        .with_leaf::<EnumValueNode>(ValueNode::Enum)
        .with_leaf::<ListValueNode>(ValueNode::List)
        .with_leaf::<ObjectValueNode>(ValueNode::Object)
});

pub static SELECTION_TABLE: LazyLock<DispatchTable<SelectionNode>> = LazyLock::new(|| {
    DispatchTable::new("Selection")
        .with_leaf::<FieldNode>(SelectionNode::Field)
        .with_leaf::<FragmentSpreadNode>(SelectionNode::FragmentSpread)
        .with_leaf::<InlineFragmentNode>(SelectionNode::InlineFragment)
});

pub static EXECUTABLE_DEFINITION_TABLE: LazyLock<DispatchTable<ExecutableDefinitionNode>> =
    LazyLock::new(|| {
        DispatchTable::new("ExecutableDefinition")
            .with_leaf::<OperationDefinitionNode>(ExecutableDefinitionNode::Operation)
            .with_leaf::<FragmentDefinitionNode>(ExecutableDefinitionNode::Fragment)
    });

pub static TYPE_DEFINITION_TABLE: LazyLock<DispatchTable<TypeDefinitionNode>> =
    LazyLock::new(|| {
        DispatchTable::new("TypeDefinition")
            .with_leaf::<ScalarTypeDefinitionNode>(TypeDefinitionNode::Scalar)
            .with_leaf::<ObjectTypeDefinitionNode>(TypeDefinitionNode::Object)
            .with_leaf::<InterfaceTypeDefinitionNode>(TypeDefinitionNode::Interface)
            .with_leaf::<UnionTypeDefinitionNode>(TypeDefinitionNode::Union)
            .with_leaf::<EnumTypeDefinitionNode>(TypeDefinitionNode::Enum)
            .with_leaf::<InputObjectTypeDefinitionNode>(TypeDefinitionNode::InputObject)
    });

pub static TYPE_EXTENSION_TABLE: LazyLock<DispatchTable<TypeExtensionNode>> =
    LazyLock::new(|| {
        DispatchTable::new("TypeExtension")
            .with_leaf::<ScalarTypeExtensionNode>(TypeExtensionNode::Scalar)
            .with_leaf::<ObjectTypeExtensionNode>(TypeExtensionNode::Object)
            .with_leaf::<InterfaceTypeExtensionNode>(TypeExtensionNode::Interface)
            .with_leaf::<UnionTypeExtensionNode>(TypeExtensionNode::Union)
            .with_leaf::<EnumTypeExtensionNode>(TypeExtensionNode::Enum)
            .with_leaf::<InputObjectTypeExtensionNode>(TypeExtensionNode::InputObject)
    });

// =============================================================================
// Composed tables
// =============================================================================

pub static TYPE_SYSTEM_DEFINITION_TABLE: LazyLock<DispatchTable<TypeSystemDefinitionNode>> =
    LazyLock::new(|| {
        DispatchTable::new("TypeSystemDefinition")
            .merge(&*TYPE_DEFINITION_TABLE, TypeSystemDefinitionNode::Type)
            .with_leaf::<SchemaDefinitionNode>(TypeSystemDefinitionNode::Schema)
            .with_leaf::<DirectiveDefinitionNode>(TypeSystemDefinitionNode::Directive)
    });

pub static TYPE_SYSTEM_EXTENSION_TABLE: LazyLock<DispatchTable<TypeSystemExtensionNode>> =
    LazyLock::new(|| {
        DispatchTable::new("TypeSystemExtension")
            .merge(&*TYPE_EXTENSION_TABLE, TypeSystemExtensionNode::Type)
            .with_leaf::<SchemaExtensionNode>(TypeSystemExtensionNode::Schema)
    });

pub static DEFINITION_TABLE: LazyLock<DispatchTable<DefinitionNode>> = LazyLock::new(|| {
    DispatchTable::new("Definition")
        .merge(&*TYPE_SYSTEM_DEFINITION_TABLE, DefinitionNode::TypeSystem)
        .merge(&*TYPE_SYSTEM_EXTENSION_TABLE, DefinitionNode::TypeSystemExtension)
        .merge(&*EXECUTABLE_DEFINITION_TABLE, DefinitionNode::Executable)
});
