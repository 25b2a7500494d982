use crate::ast::ExecutableDefinitionNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::OperationType;
use crate::ast::SelectionNode;
use crate::ast::SelectionSetNode;
use crate::ast::VariableDefinitionNode;
use crate::graphql_parser_ast::no_pos;
use crate::graphql_parser_ast::operation;
use crate::print::shared::arguments;
use crate::print::shared::directives;
use crate::print::shared::type_;
use crate::print::shared::value;
use crate::AstBuildError;
use graphql_parser::query::TypeCondition;

type Result<T> = std::result::Result<T, AstBuildError>;

pub(super) fn definition(def: &ExecutableDefinitionNode) -> Result<operation::Definition> {
    Ok(match def {
        ExecutableDefinitionNode::Operation(op) => {
            operation::Definition::Operation(operation_definition(op)?)
        },
        ExecutableDefinitionNode::Fragment(frag) => {
            operation::Definition::Fragment(operation::FragmentDefinition {
                position: no_pos(),
                name: frag.name.value.clone(),
                type_condition: TypeCondition::On(frag.type_condition.name.value.clone()),
                directives: directives(&frag.directives)?,
                selection_set: selection_set(&frag.selection_set)?,
            })
        },
    })
}

fn operation_definition(op: &OperationDefinitionNode) -> Result<operation::OperationDefinition> {
    let is_shorthand = op.operation == OperationType::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty();
    if is_shorthand {
        return Ok(operation::OperationDefinition::SelectionSet(
            selection_set(&op.selection_set)?,
        ));
    }

    let name = op.name.as_ref().map(|name| name.value.clone());
    let variable_definitions = variable_definitions(&op.variable_definitions)?;
    let directives = directives(&op.directives)?;
    let selection_set = selection_set(&op.selection_set)?;
    Ok(match op.operation {
        OperationType::Query => operation::OperationDefinition::Query(operation::Query {
            position: no_pos(),
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        OperationType::Mutation => operation::OperationDefinition::Mutation(operation::Mutation {
            position: no_pos(),
            name,
            variable_definitions,
            directives,
            selection_set,
        }),
        OperationType::Subscription => {
            operation::OperationDefinition::Subscription(operation::Subscription {
                position: no_pos(),
                name,
                variable_definitions,
                directives,
                selection_set,
            })
        },
    })
}

fn variable_definitions(
    var_defs: &[VariableDefinitionNode],
) -> Result<Vec<operation::VariableDefinition>> {
    var_defs.iter()
        .map(|var_def| Ok(operation::VariableDefinition {
            position: no_pos(),
            name: var_def.variable.name.value.clone(),
            var_type: type_(&var_def.type_),
            default_value: var_def.default_value
                .as_ref()
                .map(value)
                .transpose()?,
        }))
        .collect()
}

fn selection_set(selection_set: &SelectionSetNode) -> Result<operation::SelectionSet> {
    Ok(operation::SelectionSet {
        span: (no_pos(), no_pos()),
        items: selection_set.selections
            .iter()
            .map(selection)
            .collect::<Result<_>>()?,
    })
}

fn selection(selection: &SelectionNode) -> Result<operation::Selection> {
    Ok(match selection {
        SelectionNode::Field(field) => operation::Selection::Field(operation::Field {
            position: no_pos(),
            alias: field.alias.as_ref().map(|alias| alias.value.clone()),
            name: field.name.value.clone(),
            arguments: arguments(&field.arguments)?,
            directives: directives(&field.directives)?,
            selection_set: match &field.selection_set {
                Some(field_selections) => self::selection_set(field_selections)?,
                None => self::selection_set(&SelectionSetNode::default())?,
            },
        }),
        SelectionNode::FragmentSpread(spread) => {
            operation::Selection::FragmentSpread(operation::FragmentSpread {
                position: no_pos(),
                fragment_name: spread.name.value.clone(),
                directives: directives(&spread.directives)?,
            })
        },
        SelectionNode::InlineFragment(inline) => {
            operation::Selection::InlineFragment(operation::InlineFragment {
                position: no_pos(),
                type_condition: inline.type_condition
                    .as_ref()
                    .map(|named| TypeCondition::On(named.name.value.clone())),
                directives: directives(&inline.directives)?,
                selection_set: selection_set(&inline.selection_set)?,
            })
        },
    })
}
