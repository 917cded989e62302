mod graphql_files;
mod introspection;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use introspection::IntrospectionCmd;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Print the introspection types and the built-in directives.
    Introspection(IntrospectionCmd),

    /// Pretty-print a schema, one of its types, or operations against it.
    Print(Box<PrintCmd>),

    /// Load a schema and report what it defines.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn execute(self, cli: Cli) -> CommandResult {
        match self {
            Self::Introspection(cmd) => cmd.execute(cli).await,
            Self::Print(cmd) => cmd.execute(cli).await,
            Self::Validate(cmd) => cmd.execute(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
