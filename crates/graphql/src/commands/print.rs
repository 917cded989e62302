use crate::Cli;
use crate::CommandResult;
use crate::CliCommand;
use crate::commands::graphql_files::GraphQLFileArgs;
use crate::output_utils;
use anyhow::Context;
use libgraphql_printer::NameFilter;
use libgraphql_printer::PrintResult;
use libgraphql_printer::Printer;
use libgraphql_printer::Settings;
use libgraphql_printer::ast;
use libgraphql_printer::schema::Schema;
use libgraphql_printer::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub(crate) enum Preset {
    #[default]
    Default,
    Graphql,
    Normalized,
}
impl Preset {
    pub(crate) fn settings(self) -> Settings {
        match self {
            Self::Default => Settings::default(),
            Self::Graphql => Settings::graphql(),
            Self::Normalized => Settings::normalized(),
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        default_value_t=Preset::Default,
        help="Base formatting settings that the other flags adjust.",
        long,
        value_enum,
    )]
    pub preset: Preset,

    #[arg(
        help="Column after which lists are broken onto multiple lines.",
        long,
    )]
    pub line_length: Option<usize>,

    #[arg(
        help="Number of spaces per indentation level.",
        long,
    )]
    pub indent_width: Option<usize>,

    #[arg(
        help="Print every definition, not only those reachable from the root \
             operation types.",
        long,
    )]
    pub print_unused_definitions: bool,

    #[arg(help="Omit directive invocations.", long)]
    pub no_directives: bool,

    #[arg(help="Omit directive definitions.", long)]
    pub no_directive_definitions: bool,

    #[arg(
        help="Hide a type along with every reference to it. May be repeated.",
        long="exclude-type",
        value_name="NAME",
    )]
    pub excluded_types: Vec<String>,

    #[arg(
        help="Hide a directive along with its definition. May be repeated.",
        long="exclude-directive",
        value_name="NAME",
    )]
    pub excluded_directives: Vec<String>,

    #[arg(
        conflicts_with="operations",
        help="Print only the named schema type.",
        long="type",
        value_name="NAME",
    )]
    pub type_name: Option<String>,

    #[arg(
        help="Follow the printed type with every definition it depends on.",
        long,
        requires="type_name",
    )]
    pub export: bool,

    #[arg(
        help="Executable documents to print against the schema instead of the \
             schema itself. May be repeated.",
        long,
        value_name="FILE",
    )]
    pub operations: Vec<PathBuf>,

    #[arg(
        help="Report the types and directives referenced by the output on \
             stderr.",
        long,
    )]
    pub stats: bool,

    #[command(flatten)]
    pub inputs: GraphQLFileArgs,
}

impl PrintCmd {
    pub(crate) fn settings(&self) -> Settings {
        let mut settings = self.preset.settings();

        if let Some(line_length) = self.line_length {
            settings = settings.with_line_length(line_length);
        }
        if let Some(indent_width) = self.indent_width {
            settings = settings.with_indent(" ".repeat(indent_width));
        }
        if self.print_unused_definitions {
            settings = settings.with_print_unused_definitions(true);
        }
        if self.no_directives {
            settings = settings.with_print_directives(false);
        }
        if self.no_directive_definitions {
            settings = settings.with_print_directive_definitions(false);
        }
        if !self.excluded_types.is_empty() {
            let filter = excluding(settings.type_filter(), &self.excluded_types);
            settings = settings.with_type_filter(filter);
        }
        if !self.excluded_directives.is_empty() {
            let filter = excluding(settings.directive_filter(), &self.excluded_directives);
            settings = settings.with_directive_filter(filter);
        }

        settings
    }

    fn load_schema(&self) -> anyhow::Result<(Schema, usize)> {
        let discovered = self.inputs.discover()?;
        let num_files = discovered.file_paths.len();
        let schema = SchemaBuilder::new()
            .load_files(discovered.file_paths)
            .and_then(|builder| builder.build())
            .context("Failed to build the schema")?;

        Ok((schema, num_files))
    }

    fn print(&self) -> anyhow::Result<Vec<PrintResult>> {
        let (schema, num_files) = self.load_schema()?;
        log::debug!(
            "Loaded {} types and {} directives from {num_files} files.",
            schema.all_types().len(),
            schema.all_directives().len(),
        );

        let printer = Printer::new(self.settings());

        if let Some(type_name) = &self.type_name {
            let result =
                if self.export {
                    let type_ = schema.get_type(type_name).with_context(|| {
                        format!("No type named `{type_name}` is defined in the schema")
                    })?;
                    printer.export(type_, &schema)?
                } else {
                    printer.print_schema_type(&schema, type_name)?
                };
            return Ok(vec![result]);
        }

        if self.operations.is_empty() {
            return Ok(vec![printer.print_schema(&schema)?]);
        }

        let mut results = vec![];
        for path in &self.operations {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path:#?}"))?;
            let document = ast::query::parse(&source)
                .with_context(|| format!("Failed to parse {path:#?}"))?;
            let result = printer.print_with_schema(&document, &schema)
                .with_context(|| format!("Failed to print {path:#?}"))?;
            results.push(result);
        }

        Ok(results)
    }
}

#[inherent::inherent]
impl CliCommand for PrintCmd {
    pub async fn execute(self, _cli: Cli) -> CommandResult {
        let results = match self.print() {
            Ok(results) => results,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let file_end = self.settings().file_end().to_string();
        let stdout = results.iter()
            .filter(|result| !result.is_empty())
            .map(|result| result.text().strip_suffix(file_end.as_str()).unwrap_or(result.text()))
            .collect::<Vec<_>>()
            .join("\n\n");

        if self.stats {
            CommandResult::stdout_with_report(stdout, usage_report(&results))
        } else {
            CommandResult::stdout(format_args!("{stdout}"))
        }
    }
}

/// Wraps `base` so that `names` are denied in addition to whatever `base`
/// already denies.
fn excluding(base: Option<&NameFilter>, names: &[String]) -> NameFilter {
    let base = base.cloned();
    let denied: HashSet<String> = names.iter().cloned().collect();
    NameFilter::new(move |name, is_builtin| {
        !denied.contains(name)
            && base.as_ref().is_none_or(|filter| filter.allows(name, is_builtin))
    })
}

fn usage_report(results: &[PrintResult]) -> String {
    let mut types: Vec<&str> = vec![];
    let mut directives: Vec<&str> = vec![];
    for result in results {
        types.extend(result.used_types());
        directives.extend(result.used_directives());
    }
    types.sort_unstable();
    types.dedup();
    directives.sort_unstable();
    directives.dedup();

    format!(
        concat!(
            "Used {} types: {}\n",
            "Used {} directives: {}",
        ),
        types.len(),
        types.join(", "),
        directives.len(),
        directives.join(", "),
    )
}
