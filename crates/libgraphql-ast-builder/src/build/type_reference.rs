use crate::ast::TypeNode;
use crate::graphql_parser_ast;
use crate::graphql_parser_ast::operation;
use crate::parse;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

/// Parses a type reference such as `"[ID!]!"` into a [`TypeNode`].
///
/// The reference is handed to the GraphQL grammar parser as the type of a
/// throwaway variable definition, so every form the grammar accepts
/// (arbitrarily nested lists, non-null at any level) is supported here.
pub fn parse_type_reference(src: &str) -> Result<TypeNode> {
    let trimmed = src.trim();
    let is_type_ref_char = |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '[' | ']' | '!' | ' ' | '\t')
    };
    if trimmed.is_empty() || !trimmed.chars().all(is_type_ref_char) {
        return Err(invalid_type_reference(src, "unexpected characters"));
    }

    let wrapper = format!("query($typeRef: {trimmed}) {{ __typename }}");
    let doc = graphql_parser_ast::operation::parse(wrapper.as_str())
        .map_err(|err| invalid_type_reference(src, err.to_string().trim()))?;

    let var_type = doc.definitions
        .into_iter()
        .next()
        .and_then(|def| match def {
            operation::Definition::Operation(
                operation::OperationDefinition::Query(query),
            ) => query.variable_definitions.into_iter().next(),
            _ => None,
        })
        .map(|var_def| var_def.var_type)
        .ok_or_else(|| invalid_type_reference(src, "no type found"))?;

    Ok(parse::type_from_graphql_parser(var_type))
}

fn invalid_type_reference(src: &str, reason: &str) -> AstBuildError {
    AstBuildError::malformed(
        None,
        format!("invalid type reference `{src}`: {reason}"),
    )
}
