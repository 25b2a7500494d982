use anyhow::Context;
use libgraphql_ast_builder::DocumentApi;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The file-discovery flags shared by every command that reads GraphQL
/// from disk.
#[derive(Debug, clap::Args)]
pub(crate) struct GraphQLFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl GraphQLFileArgs {
    /// Every GraphQL file located at or under the given paths, in walk
    /// order.
    pub(crate) fn find_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("Failed to walk the filesystem at/under {path:#?}.")
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                let matches_ext = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single explicit file argument is loaded even when its extension
        // is not in the filter.
        if file_paths.is_empty() && self.file_or_dir_paths.len() == 1 {
            let first_arg_path = &self.file_or_dir_paths[0];
            if first_arg_path.is_file() {
                log::warn!(
                    "Proceeding to load {first_arg_path:#?} even though it \
                    doesn't match any of the --graphql-file-exts ({}).",
                    self.graphql_file_exts.join(", "),
                );
                file_paths.push(first_arg_path.clone());
            }
        }

        log::debug!("Found {} GraphQL files.", file_paths.len());
        Ok(file_paths)
    }

    /// Reads and merges every discovered file into one document.
    pub(crate) fn load_document(&self) -> anyhow::Result<(DocumentApi, usize)> {
        let file_paths = self.find_files()?;
        if file_paths.is_empty() {
            anyhow::bail!("No GraphQL files found at {:#?}.", self.file_or_dir_paths);
        }
        let document = load_files(&file_paths)?;
        Ok((document, file_paths.len()))
    }
}

pub(crate) fn load_files(file_paths: &[PathBuf]) -> anyhow::Result<DocumentApi> {
    let mut document = DocumentApi::new();
    for file_path in file_paths {
        let src = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {file_path:#?}."))?;
        document.add_sdl(&src)
            .with_context(|| format!("Failed to load GraphQL from {file_path:#?}."))?;
    }
    Ok(document)
}
