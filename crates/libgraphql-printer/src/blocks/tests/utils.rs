use crate::Collector;
use crate::Settings;
use crate::ast;
use crate::blocks::Block;
use crate::context::Context;
use crate::print_error::Result;
use crate::schema::Schema;

/// Renders `block` at level 0 from column 0.
pub(super) fn render(
    block: &dyn Block,
    settings: &Settings,
    schema: Option<&Schema>,
) -> Result<(String, Collector)> {
    let ctx = Context::new(settings, None, schema);
    let mut collector = Collector::default();
    let text = block.serialize(&ctx, &mut collector, 0, 0)?;
    Ok((text, collector))
}

pub(super) fn render_text(block: &dyn Block, settings: &Settings) -> String {
    render(block, settings, None)
        .expect("block renders without a schema")
        .0
}

/// The value passed as the first argument in `{ f(v: <source>) }`.
pub(super) fn parse_value(source: &str) -> ast::operation::Value {
    let doc = ast::query::parse(&format!("{{ f(v: {source}) }}"))
        .expect("value source parses");
    let Some(ast::query::Definition::Operation(
        ast::query::OperationDefinition::SelectionSet(selection_set),
    )) = doc.definitions.first() else {
        panic!("expected a shorthand query");
    };
    let Some(ast::query::Selection::Field(field)) = selection_set.items.first() else {
        panic!("expected a field selection");
    };
    field.arguments[0].1.clone()
}

pub(super) fn parse_schema(source: &str) -> ast::schema::Document {
    ast::schema::parse(source).expect("schema source parses")
}

pub(super) fn used_types(collector: &Collector) -> Vec<&str> {
    collector.used_types().collect()
}

pub(super) fn used_directives(collector: &Collector) -> Vec<&str> {
    collector.used_directives().collect()
}
