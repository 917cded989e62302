use crate::Cli;
use crate::commands::CommandEnum;
use crate::commands::print::Preset;
use crate::commands::tests::utils::parse_cli;
use clap::CommandFactory;

#[test]
fn help_describes_the_printer() {
    let help = Cli::command().render_help().to_string();

    assert!(help.contains("Pretty-print GraphQL schemas, types and operations."), "{help}");
    for subcommand in ["introspection", "print", "validate"] {
        assert!(help.contains(subcommand), "`{subcommand}` missing from:\n{help}");
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn no_subcommand_parses() {
    let cli = parse_cli(&["-v"]).expect("arguments parse");

    assert!(cli.verbose);
    assert!(cli.cmd.is_none());
}

mod introspection {
    use super::*;

    fn execute(args: &[&str]) -> crate::CommandResult {
        let mut cli = parse_cli(args).expect("arguments parse");
        let Some(CommandEnum::Introspection(cmd)) = cli.cmd.take() else {
            panic!("expected an introspection command");
        };

        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(cmd.execute(cli))
    }

    #[test]
    fn arguments() {
        let mut cli = parse_cli(&["introspection", "--preset", "normalized", "--indent-width", "2"])
            .expect("arguments parse");
        let Some(CommandEnum::Introspection(cmd)) = cli.cmd.take() else {
            panic!("expected an introspection command");
        };

        assert_eq!(cmd.preset, Preset::Normalized);
        assert_eq!(cmd.settings().indent(), "  ");
        assert!(cmd.settings().normalize_schema());
    }

    #[test]
    fn prints_the_introspection_schema() {
        let result = execute(&["introspection"]);

        let stdout = result.stdout.expect("introspection prints to stdout");
        assert!(stdout.contains("type __Schema {\n    description: String\n"), "{stdout}");
        assert!(stdout.contains("directive @specifiedBy(url: String!) on SCALAR"), "{stdout}");
        assert!(!stdout.ends_with('\n'));
        assert!(result.stderr.is_none());
    }
}
