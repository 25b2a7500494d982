use crate::api::DefinitionApi;
use crate::api::DirectiveDefinitionApi;
use crate::api::EnumTypeApi;
use crate::api::FragmentDefinitionApi;
use crate::api::InputTypeApi;
use crate::api::InterfaceTypeApi;
use crate::api::ObjectTypeApi;
use crate::api::OperationDefinitionApi;
use crate::api::ScalarTypeApi;
use crate::api::SchemaDefinitionApi;
use crate::api::TypeDefinitionApi;
use crate::api::UnionTypeApi;
use crate::ast::DefinitionNode;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::DocumentNode;
use crate::ast::NodeKinded;
use crate::ast::TypeDefinitionNode;
use crate::ast::TypeSystemDefinitionNode;
use crate::build::directive_definition_node;
use crate::build::type_definition_node;
use crate::build::Props;
use crate::crud;
use crate::crud::Crud;
use crate::parse::normalize_document_input;
use crate::parse::DocumentInput;
use crate::AstBuildError;
use crate::NodeKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Type definitions are keyed by name; every other definition is invisible
/// to the type collection.
fn type_name_of(definition: &DefinitionNode) -> Option<&str> {
    definition.as_type_definition().map(|type_def| type_def.name().as_str())
}

fn directive_name_of(definition: &DefinitionNode) -> Option<&str> {
    definition.as_directive_definition().map(|directive_def| directive_def.name.as_str())
}

fn not_a(expected: &str, actual: NodeKind) -> AstBuildError {
    AstBuildError::malformed(
        Some(actual),
        format!("expected {expected}, found a `{actual}` node"),
    )
}

fn type_definition(props: Props<DefinitionNode>) -> Result<DefinitionNode> {
    match props {
        Props::Node(definition) => match definition.as_type_definition() {
            Some(_) => Ok(definition),
            None => Err(not_a("a type definition", definition.kind())),
        },
        Props::Raw(raw) => Ok(type_definition_node(raw)?.into()),
    }
}

fn directive_definition(props: Props<DefinitionNode>) -> Result<DefinitionNode> {
    match props {
        Props::Node(definition) => match definition.as_directive_definition() {
            Some(_) => Ok(definition),
            None => Err(AstBuildError::KindMismatch {
                expected: NodeKind::DirectiveDefinition,
                actual: definition.kind(),
            }),
        },
        Props::Raw(raw) => Ok(TypeSystemDefinitionNode::Directive(
            directive_definition_node(raw)?,
        ).into()),
    }
}

/// A document under construction: the merge point for parsed text and
/// already-built documents, and the entry point for editing its
/// definitions.
///
/// Type definitions form a named collection (no two types share a name);
/// directive definitions form another. Operations and fragments are kept in
/// the order they were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentApi {
    document: DocumentNode,
}
impl DocumentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts the definitions of an existing document, with the same
    /// uniqueness checks as [`add_definition`](Self::add_definition).
    pub fn from_document(document: DocumentNode) -> Result<Self> {
        Self::from_input(DocumentInput::Document(document))
    }

    /// Normalizes `input` and adds its definitions left to right. Two type
    /// definitions with the same name fail with [`AstBuildError::Conflict`].
    pub fn from_input(input: impl Into<DocumentInput>) -> Result<Self> {
        let mut api = Self::new();
        api.add_input(input)?;
        Ok(api)
    }

    pub fn add_input(&mut self, input: impl Into<DocumentInput>) -> Result<&mut Self> {
        for definition in normalize_document_input(input.into())? {
            self.add_definition(definition)?;
        }
        Ok(self)
    }

    pub fn add_sdl(&mut self, src: &str) -> Result<&mut Self> {
        self.add_input(DocumentInput::Text(src.to_string()))
    }

    /// Appends one definition, enforcing name uniqueness for type and
    /// directive definitions.
    pub fn add_definition(&mut self, definition: impl Into<DefinitionNode>) -> Result<&mut Self> {
        let definition = definition.into();
        if definition.as_type_definition().is_some() {
            self.types().create(definition)?;
        } else if definition.as_directive_definition().is_some() {
            self.directive_definitions().create(definition)?;
        } else {
            self.document.definitions.push(definition);
        }
        Ok(self)
    }

    pub fn document(&self) -> &DocumentNode {
        &self.document
    }

    pub fn to_document(self) -> DocumentNode {
        self.document
    }

    pub fn definitions(&self) -> &[DefinitionNode] {
        self.document.definitions.as_slice()
    }

    /// Every named definition keyed by name, in document order. Schema
    /// definitions, extensions of the schema and anonymous operations are
    /// left out.
    pub fn definitions_by_name(&self) -> IndexMap<&str, &DefinitionNode> {
        self.document.definitions.iter()
            .filter_map(|definition| definition.name().map(|name| (name, definition)))
            .collect()
    }

    pub fn definition_apis(&mut self) -> Vec<DefinitionApi<'_>> {
        self.document.definitions.iter_mut()
            .map(DefinitionApi::new)
            .collect()
    }

    // ─── Types ──────────────────────────────────────────────────────────────

    fn types(&mut self) -> Crud<'_, DefinitionNode> {
        Crud::new(
            self.document.context(),
            "types",
            &mut self.document.definitions,
            type_name_of,
            type_definition,
        )
    }

    pub fn type_names(&self) -> Vec<String> {
        crud::names_in(self.definitions(), type_name_of)
    }

    pub fn has_type(&self, name: &str) -> bool {
        crud::position_in(self.definitions(), type_name_of, name).is_some()
    }

    pub fn get_type(&mut self, name: &str) -> Result<TypeDefinitionApi<'_>> {
        let parent = self.document.context();
        self.document.definitions.iter_mut()
            .find(|definition| type_name_of(definition) == Some(name))
            .and_then(DefinitionNode::as_type_definition_mut)
            .map(TypeDefinitionApi::new)
            .ok_or_else(|| crud::not_found("get", "types", name, parent))
    }

    pub fn get_object_type(&mut self, name: &str) -> Result<ObjectTypeApi<'_>> {
        self.get_type(name)?.into_object_type()
    }

    pub fn get_interface_type(&mut self, name: &str) -> Result<InterfaceTypeApi<'_>> {
        self.get_type(name)?.into_interface_type()
    }

    pub fn get_union_type(&mut self, name: &str) -> Result<UnionTypeApi<'_>> {
        self.get_type(name)?.into_union_type()
    }

    pub fn get_scalar_type(&mut self, name: &str) -> Result<ScalarTypeApi<'_>> {
        self.get_type(name)?.into_scalar_type()
    }

    pub fn get_enum_type(&mut self, name: &str) -> Result<EnumTypeApi<'_>> {
        self.get_type(name)?.into_enum_type()
    }

    pub fn get_input_type(&mut self, name: &str) -> Result<InputTypeApi<'_>> {
        self.get_type(name)?.into_input_type()
    }

    /// Adds a type definition built from `props`; an existing type with the
    /// same name fails with [`AstBuildError::Conflict`].
    pub fn create_type(
        &mut self,
        props: impl Into<Props<TypeDefinitionNode>>,
    ) -> Result<TypeDefinitionApi<'_>> {
        let created = self.types().create(props.into().map(DefinitionNode::from))?;
        as_type_api(created)
    }

    pub fn upsert_type(
        &mut self,
        props: impl Into<Props<TypeDefinitionNode>>,
    ) -> Result<TypeDefinitionApi<'_>> {
        let upserted = self.types().upsert(props.into().map(DefinitionNode::from))?;
        as_type_api(upserted)
    }

    pub fn update_type(
        &mut self,
        name: &str,
        partial: impl Into<Props<TypeDefinitionNode>>,
    ) -> Result<TypeDefinitionApi<'_>> {
        let updated = self.types().update(name, partial.into().map(DefinitionNode::from))?;
        as_type_api(updated)
    }

    pub fn remove_type(&mut self, name: &str) -> Result<TypeDefinitionNode> {
        match self.types().remove(name)? {
            DefinitionNode::TypeSystem(TypeSystemDefinitionNode::Type(type_def)) => Ok(type_def),
            other => Err(not_a("a type definition", other.kind())),
        }
    }

    // ─── Schema & directive definitions ─────────────────────────────────────

    pub fn schema_definition(&mut self) -> Option<SchemaDefinitionApi<'_>> {
        self.document.definitions.iter_mut()
            .find_map(DefinitionNode::as_schema_definition_mut)
            .map(SchemaDefinitionApi::new)
    }

    fn directive_definitions(&mut self) -> Crud<'_, DefinitionNode> {
        Crud::new(
            self.document.context(),
            "directives",
            &mut self.document.definitions,
            directive_name_of,
            directive_definition,
        )
    }

    pub fn directive_definition_names(&self) -> Vec<String> {
        crud::names_in(self.definitions(), directive_name_of)
    }

    pub fn get_directive_definition(&mut self, name: &str) -> Result<DirectiveDefinitionApi<'_>> {
        let definition = self.directive_definitions().find_or_fail_mut(name)?;
        let actual = definition.kind();
        definition.as_directive_definition_mut()
            .map(DirectiveDefinitionApi::new)
            .ok_or(AstBuildError::KindMismatch {
                expected: NodeKind::DirectiveDefinition,
                actual,
            })
    }

    pub fn create_directive_definition(
        &mut self,
        props: impl Into<Props<DirectiveDefinitionNode>>,
    ) -> Result<DirectiveDefinitionApi<'_>> {
        let props = props.into().map(|directive_def| {
            DefinitionNode::from(TypeSystemDefinitionNode::Directive(directive_def))
        });
        let definition = self.directive_definitions().create(props)?;
        let actual = definition.kind();
        definition.as_directive_definition_mut()
            .map(DirectiveDefinitionApi::new)
            .ok_or(AstBuildError::KindMismatch {
                expected: NodeKind::DirectiveDefinition,
                actual,
            })
    }

    // ─── Executable definitions ─────────────────────────────────────────────

    /// Names of the named operations; anonymous operations have none.
    pub fn operation_names(&self) -> Vec<String> {
        self.document.definitions.iter()
            .filter_map(DefinitionNode::as_operation)
            .filter_map(|op| op.name.as_ref())
            .map(|name| name.value.clone())
            .collect()
    }

    pub fn get_operation(&mut self, name: &str) -> Result<OperationDefinitionApi<'_>> {
        let parent = self.document.context();
        self.document.definitions.iter_mut()
            .filter_map(DefinitionNode::as_operation_mut)
            .find(|op| op.name.as_ref().is_some_and(|op_name| op_name.as_str() == name))
            .map(OperationDefinitionApi::new)
            .ok_or_else(|| crud::not_found("get", "operations", name, parent))
    }

    pub fn fragment_names(&self) -> Vec<String> {
        self.document.definitions.iter()
            .filter_map(DefinitionNode::as_fragment)
            .map(|frag| frag.name.value.clone())
            .collect()
    }

    pub fn get_fragment(&mut self, name: &str) -> Result<FragmentDefinitionApi<'_>> {
        let parent = self.document.context();
        self.document.definitions.iter_mut()
            .filter_map(DefinitionNode::as_fragment_mut)
            .find(|frag| frag.name.as_str() == name)
            .map(FragmentDefinitionApi::new)
            .ok_or_else(|| crud::not_found("get", "fragments", name, parent))
    }

    // ─── Output ─────────────────────────────────────────────────────────────

    /// Prints the document as GraphQL text.
    pub fn to_sdl(&self) -> Result<String> {
        crate::print::print_document(&self.document)
    }
}
impl std::convert::TryFrom<DocumentNode> for DocumentApi {
    type Error = AstBuildError;

    fn try_from(document: DocumentNode) -> Result<Self> {
        Self::from_document(document)
    }
}

fn as_type_api(definition: &mut DefinitionNode) -> Result<TypeDefinitionApi<'_>> {
    let actual = definition.kind();
    definition.as_type_definition_mut()
        .map(TypeDefinitionApi::new)
        .ok_or_else(|| not_a("a type definition", actual))
}
