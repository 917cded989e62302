mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
use std::process::ExitCode;
use std::str::FromStr;
pub(crate) use cli::Cli;
pub(crate) use command::CliCommand;
pub(crate) use command_result::CommandResult;

const LOG_LEVEL_ENV_VAR: &str = "GRAPHQL_LOG_LEVEL";

#[tokio::main]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.cmd.take() else {
        return match cli.print_usage() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            },
        };
    };

    command.execute(cli).await.emit()
}

/// `--verbose` wins over the environment; an unparseable environment value
/// falls back to `WARN` so that printed output stays clean.
fn init_tracing(verbose: bool) {
    let env_val = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (log_level, invalid_env_val) = match env_val.as_deref().map(str::trim) {
        _ if verbose => (tracing::Level::DEBUG, None),
        None | Some("") => (tracing::Level::WARN, None),
        Some(val) => match tracing::Level::from_str(val) {
            Ok(level) => (level, None),
            Err(_) => (tracing::Level::WARN, Some(val.to_string())),
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(val) = invalid_env_val {
        log::warn!("Ignoring invalid `{LOG_LEVEL_ENV_VAR}` value: `{val}`");
    }
}
