use crate::Cli;
use crate::CliCommand;
use crate::CommandResult;
use crate::commands::print::Preset;
use crate::output_utils;
use libgraphql_printer::Printer;
use libgraphql_printer::Settings;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectionCmd {
    #[arg(
        default_value_t=Preset::Default,
        help="Base formatting settings that the other flags adjust.",
        long,
        value_enum,
    )]
    pub preset: Preset,

    #[arg(
        help="Number of spaces per indentation level.",
        long,
    )]
    pub indent_width: Option<usize>,
}
impl IntrospectionCmd {
    pub(crate) fn settings(&self) -> Settings {
        let settings = self.preset.settings();
        match self.indent_width {
            Some(indent_width) => settings.with_indent(" ".repeat(indent_width)),
            None => settings,
        }
    }
}

#[inherent::inherent]
impl CliCommand for IntrospectionCmd {
    pub async fn execute(self, _cli: Cli) -> CommandResult {
        let settings = self.settings();
        match Printer::new(settings.clone()).print_introspection() {
            Ok(result) => CommandResult::stdout(format_args!(
                "{}",
                result.text().strip_suffix(settings.file_end()).unwrap_or(result.text()),
            )),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to print the introspection schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
