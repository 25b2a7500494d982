use crate::commands::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_ast_builder::ast::DefinitionNode;
use libgraphql_ast_builder::ast::NodeKinded;
use libgraphql_ast_builder::ast::TypeDefinitionNode;
use libgraphql_ast_builder::DocumentApi;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[command(flatten)]
    files: GraphQLFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (document, num_files) = match self.files.load_document() {
            Ok(loaded) => loaded,
            Err(err) => return CommandResult::failure(err),
        };

        let mut lines = vec![format!(
            "{} Loaded {} definitions from {num_files} files.",
            output_utils::GREEN_CHECK,
            document.definitions().len(),
        )];
        lines.extend(summarize(&document));
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}

/// One line per definition: its kind, its name (when it has one) and the
/// names of its members.
fn summarize(document: &DocumentApi) -> Vec<String> {
    document.definitions().iter()
        .map(|definition| {
            let mut line = format!("  * {}", definition.kind());
            if let Some(name) = definition.name() {
                line.push_str(&format!(" {name}"));
            }
            let members = member_names(definition);
            if !members.is_empty() {
                line.push_str(&format!(" {{ {} }}", members.join(", ")));
            }
            line
        })
        .collect()
}

fn member_names(definition: &DefinitionNode) -> Vec<&str> {
    match definition.as_type_definition() {
        Some(TypeDefinitionNode::Object(object)) => {
            object.fields.iter().map(|field| field.name.as_str()).collect()
        },
        Some(TypeDefinitionNode::Interface(iface)) => {
            iface.fields.iter().map(|field| field.name.as_str()).collect()
        },
        Some(TypeDefinitionNode::InputObject(input)) => {
            input.fields.iter().map(|field| field.name.as_str()).collect()
        },
        Some(TypeDefinitionNode::Enum(enum_)) => {
            enum_.values.iter().map(|value| value.name.as_str()).collect()
        },
        Some(TypeDefinitionNode::Union(union)) => {
            union.types.iter().map(|member| member.name.as_str()).collect()
        },
        Some(TypeDefinitionNode::Scalar(_)) | None => vec![],
    }
}
