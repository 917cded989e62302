use crate::Cli;
use crate::commands::CommandEnum;
use crate::commands::print::PrintCmd;
use clap::Parser;
use std::path::PathBuf;

pub(super) fn parse_cli(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("graphql").chain(args.iter().copied()))
}

pub(super) fn parse_print_cmd(args: &[&str]) -> (PrintCmd, Cli) {
    let mut cli = parse_cli(args).expect("arguments parse");
    match cli.cmd.take() {
        Some(CommandEnum::Print(cmd)) => (*cmd, cli),
        other => panic!("expected a print command, got {other:?}"),
    }
}

/// Creates a fresh directory under the system temp dir holding `files`.
pub(super) fn fixture_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("graphql-cli-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    for (file, content) in files {
        let path = dir.join(file);
        std::fs::create_dir_all(path.parent().expect("fixture files have a parent"))
            .expect("fixture dir is created");
        std::fs::write(path, content).expect("fixture file is written");
    }
    dir
}
