use crate::ast::DefinitionNode;
use crate::ast::ExecutableDefinitionNode;
use crate::ast::FieldNode;
use crate::ast::FragmentDefinitionNode;
use crate::ast::FragmentSpreadNode;
use crate::ast::InlineFragmentNode;
use crate::ast::OperationDefinitionNode;
use crate::ast::OperationType;
use crate::ast::SelectionNode;
use crate::ast::SelectionSetNode;
use crate::ast::VariableDefinitionNode;
use crate::ast::VariableNode;
use crate::graphql_parser_ast::operation;
use crate::parse::shared::arguments;
use crate::parse::shared::directives;
use crate::parse::shared::name;
use crate::parse::shared::named_type;
use crate::parse::shared::type_from_graphql_parser;
use crate::parse::shared::value_from_graphql_parser;
use crate::AstBuildError;

type Result<T> = std::result::Result<T, AstBuildError>;

pub(super) fn definitions(document: operation::Document) -> Result<Vec<DefinitionNode>> {
    document.definitions
        .into_iter()
        .map(|def| Ok(DefinitionNode::from(executable_definition(def)?)))
        .collect()
}

fn executable_definition(def: operation::Definition) -> Result<ExecutableDefinitionNode> {
    Ok(match def {
        operation::Definition::Operation(op) => {
            ExecutableDefinitionNode::Operation(operation_definition(op)?)
        },
        operation::Definition::Fragment(frag) => {
            ExecutableDefinitionNode::Fragment(fragment_definition(frag)?)
        },
    })
}

fn operation_definition(op: operation::OperationDefinition) -> Result<OperationDefinitionNode> {
    Ok(match op {
        operation::OperationDefinition::SelectionSet(selection_set) => OperationDefinitionNode {
            operation: OperationType::Query,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set: selection_set_node(selection_set)?,
        },
        operation::OperationDefinition::Query(query) => OperationDefinitionNode {
            operation: OperationType::Query,
            name: query.name.map(name),
            variable_definitions: variable_definitions(query.variable_definitions)?,
            directives: directives(query.directives)?,
            selection_set: selection_set_node(query.selection_set)?,
        },
        operation::OperationDefinition::Mutation(mutation) => OperationDefinitionNode {
            operation: OperationType::Mutation,
            name: mutation.name.map(name),
            variable_definitions: variable_definitions(mutation.variable_definitions)?,
            directives: directives(mutation.directives)?,
            selection_set: selection_set_node(mutation.selection_set)?,
        },
        operation::OperationDefinition::Subscription(subscription) => OperationDefinitionNode {
            operation: OperationType::Subscription,
            name: subscription.name.map(name),
            variable_definitions: variable_definitions(subscription.variable_definitions)?,
            directives: directives(subscription.directives)?,
            selection_set: selection_set_node(subscription.selection_set)?,
        },
    })
}

fn fragment_definition(frag: operation::FragmentDefinition) -> Result<FragmentDefinitionNode> {
    let graphql_parser::query::TypeCondition::On(typename) = frag.type_condition;
    Ok(FragmentDefinitionNode {
        name: name(frag.name),
        type_condition: named_type(typename),
        directives: directives(frag.directives)?,
        selection_set: selection_set_node(frag.selection_set)?,
    })
}

fn variable_definitions(
    var_defs: Vec<operation::VariableDefinition>,
) -> Result<Vec<VariableDefinitionNode>> {
    var_defs.into_iter()
        .map(|var_def| Ok(VariableDefinitionNode {
            variable: VariableNode {
                name: name(var_def.name),
            },
            type_: type_from_graphql_parser(var_def.var_type),
            default_value: var_def.default_value
                .map(value_from_graphql_parser)
                .transpose()?,
            directives: vec![],
        }))
        .collect()
}

fn selection_set_node(selection_set: operation::SelectionSet) -> Result<SelectionSetNode> {
    Ok(SelectionSetNode {
        selections: selection_set.items
            .into_iter()
            .map(selection)
            .collect::<Result<_>>()?,
    })
}

fn selection(selection: operation::Selection) -> Result<SelectionNode> {
    Ok(match selection {
        operation::Selection::Field(field) => {
            // Leaf fields come back from the parser with an empty selection
            // set rather than none at all.
            let selection_set = if field.selection_set.items.is_empty() {
                None
            } else {
                Some(selection_set_node(field.selection_set)?)
            };
            SelectionNode::Field(FieldNode {
                alias: field.alias.map(name),
                name: name(field.name),
                arguments: arguments(field.arguments)?,
                directives: directives(field.directives)?,
                selection_set,
            })
        },
        operation::Selection::FragmentSpread(spread) => {
            SelectionNode::FragmentSpread(FragmentSpreadNode {
                name: name(spread.fragment_name),
                directives: directives(spread.directives)?,
            })
        },
        operation::Selection::InlineFragment(inline) => {
            SelectionNode::InlineFragment(InlineFragmentNode {
                type_condition: inline.type_condition.map(|condition| {
                    let graphql_parser::query::TypeCondition::On(typename) = condition;
                    named_type(typename)
                }),
                directives: directives(inline.directives)?,
                selection_set: selection_set_node(inline.selection_set)?,
            })
        },
    })
}
