//! Printing: the canonical tree is raised into `graphql-parser`'s AST and
//! rendered with its formatter.
//!
//! A few details have no counterpart in that AST and are dropped on the
//! way out: schema descriptions, directives on variable definitions and
//! block-string markers.

mod shared;
mod to_operation;
mod to_schema;

use crate::ast::DefinitionNode;
use crate::ast::DocumentNode;
use crate::graphql_parser_ast::operation;
use crate::graphql_parser_ast::schema;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

/// A document split by grammar: type-system definitions and extensions on
/// one side, operations and fragments on the other.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLParserDocuments {
    pub schema: schema::Document,
    pub operation: operation::Document,
}

pub fn to_graphql_parser_document(document: &DocumentNode) -> Result<GraphQLParserDocuments> {
    let mut schema_defs = vec![];
    let mut operation_defs = vec![];
    for definition in &document.definitions {
        match definition {
            DefinitionNode::Executable(executable_def) => {
                operation_defs.push(to_operation::definition(executable_def)?);
            },
            DefinitionNode::TypeSystem(type_system_def) => {
                schema_defs.push(to_schema::definition(type_system_def)?);
            },
            DefinitionNode::TypeSystemExtension(type_system_ext) => {
                schema_defs.push(to_schema::extension(type_system_ext)?);
            },
        }
    }
    Ok(GraphQLParserDocuments {
        schema: schema::Document {
            definitions: schema_defs,
        },
        operation: operation::Document {
            definitions: operation_defs,
        },
    })
}

/// Renders `document` as GraphQL text, type-system definitions first.
pub fn print_document(document: &DocumentNode) -> Result<String> {
    let documents = to_graphql_parser_document(document)?;
    let mut printed = vec![];
    if !documents.schema.definitions.is_empty() {
        printed.push(documents.schema.to_string());
    }
    if !documents.operation.definitions.is_empty() {
        printed.push(documents.operation.to_string());
    }
    Ok(printed.join("\n"))
}

#[cfg(test)]
mod tests;
