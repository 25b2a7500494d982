use crate::commands::graphql_files::GraphQLFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;

#[derive(Debug, clap::Args)]
pub(crate) struct FormatCmd {
    #[command(flatten)]
    files: GraphQLFileArgs,
}
impl FormatCmd {
    fn format(&self) -> anyhow::Result<String> {
        let (document, num_files) = self.files.load_document()?;
        log::debug!("Formatting {} definitions from {num_files} files.", document.definitions().len());
        document.to_sdl().context("Failed to print the merged document.")
    }
}

#[inherent::inherent]
impl RunnableCommand for FormatCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.format().into()
    }
}
