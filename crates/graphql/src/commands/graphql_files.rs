use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File and directory inputs shared by every command that loads a schema.
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
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl GraphQLFileArgs {
    /// Finds all GraphQL files recursively located at or under each input
    /// path, in walk order.
    pub fn discover(&self) -> anyhow::Result<DiscoveredFiles> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Encountered an error while iterating recursive \
                    filesystem entities at/under {path:#?}."
                ))?;

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                log::trace!("Found file at {entry_path:#?}.");
                let matches_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                if matches_ext {
                    file_paths.push(canonicalize(entry_path)?);
                } else {
                    num_skipped += 1;
                }
            }
        }

        // A single file passed explicitly is loaded even when its extension
        // is not one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let first_arg_path = canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped = num_skipped.saturating_sub(1);
            file_paths.push(first_arg_path);
        }

        log::debug!("Found {} GraphQL files.", file_paths.len());

        Ok(DiscoveredFiles {
            file_paths,
            num_skipped,
        })
    }
}

fn canonicalize(path: &std::path::Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve the path {path:#?}"))
}
