use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    about="Pretty-print GraphQL schemas, types and operations.",
    long_about="Pretty-print GraphQL schemas, single schema types, \
               operations and the introspection schema. Layout, filtering \
               and normalization are controlled by a settings preset plus \
               per-command flags.",
    name="graphql",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log which files are loaded and which definitions are printed.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to print but the usage.
    pub(crate) fn print_usage(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
