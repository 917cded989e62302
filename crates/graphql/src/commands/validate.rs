use crate::Cli;
use crate::CommandResult;
use crate::CliCommand;
use crate::commands::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use libgraphql_printer::schema::Schema;
use libgraphql_printer::schema::SchemaBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    pub inputs: GraphQLFileArgs,
}

#[inherent::inherent]
impl CliCommand for ValidateCmd {
    pub async fn execute(self, _cli: Cli) -> CommandResult {
        let discovered = match self.inputs.discover() {
            Ok(discovered) => discovered,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors: {e:#}",
                output_utils::RED_X,
            )),
        };
        let num_files = discovered.file_paths.len();

        let schema = SchemaBuilder::new()
            .load_files(discovered.file_paths)
            .and_then(|builder| builder.build());

        match schema {
            Ok(schema) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Validated {} type definitions.\n",
                    "  * Validated {} directive definitions.",
                ),
                output_utils::GREEN_CHECK,
                num_files,
                discovered.num_skipped,
                schema.all_types().keys()
                    .filter(|name| !Schema::is_builtin_type(name))
                    .count(),
                schema.all_directives().keys()
                    .filter(|name| !Schema::is_builtin_directive(name))
                    .count(),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
