mod add_field;
mod format;
mod graphql_files;
mod inspect;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use add_field::AddFieldCmd;
use format::FormatCmd;
use inspect::InspectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// List the definitions found in one or more GraphQL files.
    Inspect(Box<InspectCmd>),

    /// Merge one or more GraphQL files and print them reformatted.
    Format(Box<FormatCmd>),

    /// Add (or replace) a field on a type and print the edited document.
    AddField(Box<AddFieldCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await,
            Self::Format(cmd) => cmd.run(cli).await,
            Self::AddField(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
