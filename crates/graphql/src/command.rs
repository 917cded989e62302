use crate::Cli;
use crate::CommandResult;

/// A `graphql` subcommand. Output and failures are both reported through the
/// returned [`CommandResult`].
pub(crate) trait CliCommand: std::fmt::Debug {
    async fn execute(self, cli: Cli) -> CommandResult;
}
