//! Text and document input: GraphQL source is parsed with `graphql-parser`
//! and lowered into canonical nodes; already-built documents are flattened
//! into their definitions.

mod definition_starts;
mod from_operation;
mod from_schema;
mod shared;

use crate::ast::DefinitionNode;
use crate::ast::DocumentNode;
use crate::graphql_parser_ast;
use crate::AstBuildError;

pub use shared::type_from_graphql_parser;
pub use shared::value_from_graphql_parser;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Anything [`normalize_document_input`] accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentInput {
    Text(String),
    Document(DocumentNode),
    Many(Vec<DocumentInput>),
}
impl std::convert::From<&str> for DocumentInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
impl std::convert::From<String> for DocumentInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl std::convert::From<DocumentNode> for DocumentInput {
    fn from(value: DocumentNode) -> Self {
        Self::Document(value)
    }
}
impl<T: Into<DocumentInput>> std::convert::From<Vec<T>> for DocumentInput {
    fn from(value: Vec<T>) -> Self {
        Self::Many(value.into_iter().map(Into::into).collect())
    }
}

/// Flattens `input` into a single list of definitions, left to right.
///
/// Text goes through [`parse_text`]. Text that no grammar accepts fails
/// with [`AstBuildError::MalformedInput`] carrying both parser messages.
/// Whitespace-only text contributes nothing.
pub fn normalize_document_input(input: DocumentInput) -> Result<Vec<DefinitionNode>> {
    let mut definitions = vec![];
    append_input(input, &mut definitions)?;
    Ok(definitions)
}

fn append_input(input: DocumentInput, definitions: &mut Vec<DefinitionNode>) -> Result<()> {
    match input {
        DocumentInput::Text(src) => definitions.extend(parse_text(&src)?),
        DocumentInput::Document(document) => definitions.extend(document.definitions),
        DocumentInput::Many(inputs) => {
            for input in inputs {
                append_input(input, definitions)?;
            }
        },
    }
    Ok(())
}

/// Parses GraphQL source text into definitions, in source order.
///
/// Text is read whole with the schema grammar and then the executable
/// grammar. When neither accepts it, the text is split at its top-level
/// definitions and each run of them is read with whichever grammar accepts
/// it, so type system and executable definitions may be mixed.
pub fn parse_text(src: &str) -> Result<Vec<DefinitionNode>> {
    if src.trim().is_empty() {
        return Ok(vec![]);
    }

    let reason = match parse_document(src) {
        Ok(document) => return document.into_definitions(),
        Err(reason) => reason,
    };

    let documents = parse_mixed(src)
        .ok_or_else(|| AstBuildError::malformed(None, reason))?;
    log::debug!("parsed mixed text as {} document(s)", documents.len());
    let mut definitions = vec![];
    for document in documents {
        definitions.extend(document.into_definitions()?);
    }
    Ok(definitions)
}

enum ParsedDocument {
    Executable(graphql_parser_ast::operation::Document),
    Schema(graphql_parser_ast::schema::Document),
}
impl ParsedDocument {
    fn into_definitions(self) -> Result<Vec<DefinitionNode>> {
        match self {
            Self::Executable(document) => {
                log::debug!(
                    "parsed {} executable definition(s)",
                    document.definitions.len(),
                );
                from_operation::definitions(document)
            },
            Self::Schema(document) => {
                log::debug!(
                    "parsed {} schema definition(s)",
                    document.definitions.len(),
                );
                from_schema::definitions(document)
            },
        }
    }
}

/// Reads `src` with the schema grammar, then the executable one. The error
/// carries both parser messages.
fn parse_document(src: &str) -> std::result::Result<ParsedDocument, String> {
    let schema_err = match graphql_parser_ast::schema::parse(src) {
        Ok(document) => return Ok(ParsedDocument::Schema(document)),
        Err(err) => err,
    };
    graphql_parser_ast::operation::parse(src)
        .map(ParsedDocument::Executable)
        .map_err(|operation_err| format!(
            "not a schema document ({}) nor an executable document ({})",
            schema_err.to_string().trim(),
            operation_err.to_string().trim(),
        ))
}

/// Splits `src` at candidate definition starts and greedily grows each piece
/// until one grammar accepts it. `None` when some piece never parses.
fn parse_mixed(src: &str) -> Option<Vec<ParsedDocument>> {
    let mut bounds = definition_starts::definition_starts(src);
    if bounds.first() != Some(&0) {
        bounds.insert(0, 0);
    }
    bounds.push(src.len());
    bounds.dedup();
    if bounds.len() < 3 {
        return None;
    }

    let mut documents = vec![];
    let mut start = 0;
    while start + 1 < bounds.len() {
        let (end, document) = (start + 1..bounds.len()).find_map(|end| {
            parse_document(&src[bounds[start]..bounds[end]])
                .ok()
                .map(|document| (end, document))
        })?;
        documents.push(document);
        start = end;
    }
    Some(documents)
}

#[cfg(test)]
mod tests;
