use crate::commands::graphql_files::load_files;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_ast_builder::api::TypeDefinitionApi;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct AddFieldCmd {
    #[arg(
        help="Name of the object, interface or input object type to add the \
             field to.",
        long,
    )]
    type_name: String,

    #[arg(
        help="The field to add, as `name: Type` (a bare `name` is typed \
             `String`). A field with the same name is updated: `name: Type` \
             retypes it, while a bare `name` keeps its current type.",
        long,
    )]
    field: String,

    #[arg(
        help="The GraphQL file that defines the type.",
        name="FILE",
    )]
    file: PathBuf,
}
impl AddFieldCmd {
    fn add_field(&self) -> anyhow::Result<String> {
        let mut document = load_files(std::slice::from_ref(&self.file))?;
        let type_def = document.get_type(&self.type_name)?;
        upsert_field(type_def, &self.field).with_context(|| {
            format!("Failed to add `{}` to `{}`.", self.field, self.type_name)
        })?;
        log::info!("Upserted `{}` on `{}`.", self.field, self.type_name);
        Ok(document.to_sdl()?)
    }
}

pub(super) fn upsert_field(type_def: TypeDefinitionApi<'_>, field: &str) -> anyhow::Result<()> {
    if type_def.is_object_type() {
        type_def.into_object_type()?.upsert_field(field)?;
    } else if type_def.is_interface_type() {
        type_def.into_interface_type()?.upsert_field(field)?;
    } else if type_def.is_input_type() {
        type_def.into_input_type()?.upsert_field(field)?;
    } else {
        anyhow::bail!(
            "`{}` is a {}, which has no fields.",
            type_def.node().name().as_str(),
            type_def.kind(),
        );
    }
    Ok(())
}

#[inherent::inherent]
impl RunnableCommand for AddFieldCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.add_field().into()
    }
}
