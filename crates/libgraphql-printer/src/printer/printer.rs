use crate::ast;
use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::ListBlock;
use crate::blocks::Node;
use crate::blocks::schema_document_definition;
use crate::blocks::text_length;
use crate::collector::Collector;
use crate::context::Context;
use crate::directive_resolver::DirectiveResolver;
use crate::print_error::PrintError;
use crate::print_error::Result;
use crate::printer::PrintResult;
use crate::printer::Printable;
use crate::printer::introspection;
use crate::printer::lowering;
use crate::printer::lowering::DefinitionName;
use crate::printer::lowering::Lowered;
use crate::printer::lowering::LoweredDefinition;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::settings::Settings;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::sync::Arc;

/// Identifies a type for [`Printer::print_schema_type()`], either by name or
/// directly.
#[derive(Clone, Copy, Debug)]
pub enum SchemaTypeRef<'a> {
    Name(&'a str),
    Type(&'a GraphQLType),
}
impl<'a> From<&'a str> for SchemaTypeRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}
impl<'a> From<&'a String> for SchemaTypeRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}
impl<'a> From<&'a GraphQLType> for SchemaTypeRef<'a> {
    fn from(type_: &'a GraphQLType) -> Self {
        Self::Type(type_)
    }
}

/// Renders [`Printable`]s as GraphQL text according to its [`Settings`].
///
/// A [`Printer`] is immutable and cheap to clone. Every print call builds a
/// fresh block tree, so the same printer may be reused for any number of
/// inputs.
///
/// When a [`Schema`] is attached to a call, it is used to type values and
/// arguments, to apply the type filters, and to reject references that the
/// schema cannot resolve. Without one, names are printed as they are.
#[derive(Clone, Debug, Default)]
pub struct Printer {
    directive_resolver: Option<Arc<dyn DirectiveResolver>>,
    level: usize,
    settings: Settings,
}
impl Printer {
    pub fn new(settings: Settings) -> Self {
        Self {
            directive_resolver: None,
            level: 0,
            settings,
        }
    }

    pub fn directive_resolver(&self) -> Option<&dyn DirectiveResolver> {
        self.directive_resolver.as_deref()
    }

    /// Indentation level the output starts at.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn with_directive_resolver(
        self,
        directive_resolver: Option<Arc<dyn DirectiveResolver>>,
    ) -> Self {
        Self { directive_resolver, ..self }
    }

    pub fn with_level(self, level: usize) -> Self {
        Self { level, ..self }
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        Self { settings, ..self }
    }

    /// Renders `printable` without a schema.
    ///
    /// A runtime [`Schema`] is always printed against itself.
    pub fn print<'a>(&self, printable: impl Into<Printable<'a>>) -> Result<PrintResult> {
        self.print_printable(printable.into(), None)
    }

    pub fn print_with_schema<'a>(
        &self,
        printable: impl Into<Printable<'a>>,
        schema: &'a Schema,
    ) -> Result<PrintResult> {
        self.print_printable(printable.into(), Some(schema))
    }

    /// Renders every definition of `schema`, or only the ones reachable from
    /// its root operation types unless
    /// [`Settings::print_unused_definitions()`] is set.
    pub fn print_schema(&self, schema: &Schema) -> Result<PrintResult> {
        self.print_printable(Printable::Schema(schema), Some(schema))
    }

    /// Renders the introspection types (`__Schema`, `__Type`, ...) and the
    /// directives every schema provides.
    ///
    /// These are built-ins, which the definition filters hide unless they
    /// explicitly allow them. This call replaces both definition filters for
    /// its duration; every other setting applies as usual.
    pub fn print_introspection(&self) -> Result<PrintResult> {
        let document = introspection::document()?;
        let printer = Self {
            settings: introspection::settings(&self.settings),
            ..self.clone()
        };

        printer.print(document)
    }

    pub fn print_schema_type<'a>(
        &self,
        schema: &'a Schema,
        type_: impl Into<SchemaTypeRef<'a>>,
    ) -> Result<PrintResult> {
        let type_ = match type_.into() {
            SchemaTypeRef::Name(name) => schema.get_type(name).ok_or_else(|| {
                PrintError::TypeNotFound {
                    type_name: name.to_string(),
                }
            })?,
            SchemaTypeRef::Type(type_) => type_,
        };

        self.print_with_schema(type_, schema)
    }

    pub fn print_type(&self, type_: &GraphQLType) -> Result<PrintResult> {
        self.print(type_)
    }

    /// Renders a value literal. When `expected` is given, input object fields
    /// and arguments are typed (and filtered) through `schema`.
    pub fn print_value<'a>(
        &self,
        value: &'a ast::operation::Value,
        expected: Option<&'a TypeAnnotation>,
        schema: Option<&'a Schema>,
    ) -> Result<PrintResult> {
        let ctx = self.context(schema);
        let mut collector = Collector::default();
        let content = self.render(
            &ctx,
            &mut collector,
            &*Node::Value(value, expected).into_block(&self.settings),
        )?;

        Ok(self.finish(&ctx, content, collector))
    }

    /// Renders `printable` followed by the definition of every type and
    /// directive in `schema` it depends on, directly or transitively.
    pub fn export<'a>(
        &self,
        printable: impl Into<Printable<'a>>,
        schema: &'a Schema,
    ) -> Result<PrintResult> {
        let lowered = lowering::lower(printable.into());
        let node = match &lowered {
            Lowered::Node(node) => *node,
            Lowered::Owned(owned) => owned.node(),
            Lowered::Schema(exported) => return self.print_schema(exported),
        };

        let ctx = self.context(Some(schema));
        let mut collector = Collector::default();
        let content = self.render(&ctx, &mut collector, &*node.into_block(&self.settings))?;
        if content.is_empty() {
            return Ok(self.finish(&ctx, content, collector));
        }

        let exported_name = lowering::declared_name(node);
        let definitions: Vec<LoweredDefinition> = lowering::schema_definitions(schema, &self.settings)
            .into_iter()
            .filter(|def| {
                def.name != DefinitionName::Schema
                    && Some(&def.name) != exported_name.as_ref()
            })
            .collect();

        let reachable = self.reachable(&ctx, &definitions, collector.clone())?;
        let dependencies: Vec<BoxedBlock<'_>> = definitions
            .iter()
            .filter(|def| is_reachable(&reachable, &def.name))
            .map(|def| schema_document_definition(&def.definition))
            .collect();
        log::debug!(
            "Exporting {} dependency definition(s) out of {}",
            dependencies.len(),
            definitions.len(),
        );

        let dependencies = self.render(
            &ctx,
            &mut collector,
            &ListBlock::document(dependencies).normalized(self.settings.normalize_schema()),
        )?;
        let content = if dependencies.is_empty() {
            content
        } else {
            let eol = ctx.eol();
            let indent = ctx.indent(self.level);
            format!("{content}{eol}{eol}{indent}{dependencies}")
        };

        Ok(self.finish(&ctx, content, collector))
    }

    fn context<'a>(&'a self, schema: Option<&'a Schema>) -> Context<'a> {
        Context::new(&self.settings, self.directive_resolver.as_deref(), schema)
    }

    /// Wraps rendered content the way every top-level output is wrapped: the
    /// starting indent in front and the file end behind, unless empty.
    fn finish(&self, ctx: &Context<'_>, content: String, collector: Collector) -> PrintResult {
        if content.is_empty() {
            return PrintResult::new(content, collector);
        }

        let indent = ctx.indent(self.level);
        let text = format!("{indent}{content}{}", self.settings.file_end());
        PrintResult::new(text, collector)
    }

    fn print_printable<'a>(
        &self,
        printable: Printable<'a>,
        schema: Option<&'a Schema>,
    ) -> Result<PrintResult> {
        let lowered = lowering::lower(printable);
        let schema = match &lowered {
            Lowered::Schema(printed) => Some(*printed),
            _ => schema,
        };

        let ctx = self.context(schema);
        let mut collector = Collector::default();
        let content = match &lowered {
            Lowered::Node(node) =>
                self.render(&ctx, &mut collector, &*node.into_block(&self.settings))?,
            Lowered::Owned(owned) =>
                self.render(&ctx, &mut collector, &*owned.node().into_block(&self.settings))?,
            Lowered::Schema(printed) =>
                self.render_schema(&ctx, &mut collector, printed)?,
        };

        Ok(self.finish(&ctx, content, collector))
    }

    /// Names reachable from `seed` by following the definitions in
    /// `definitions`. Each definition is rendered at most once, into a
    /// throwaway collector.
    fn reachable(
        &self,
        ctx: &Context<'_>,
        definitions: &[LoweredDefinition],
        seed: Collector,
    ) -> Result<Collector> {
        let by_name: HashMap<&DefinitionName, &ast::schema::Definition> = definitions
            .iter()
            .map(|def| (&def.name, &def.definition))
            .collect();

        let mut reachable = seed;
        let mut next_directive = 0;
        let mut next_type = 0;
        while next_type < reachable.type_count()
            || next_directive < reachable.directive_count() {
            let mut found = Collector::default();

            while let Some(name) = reachable.nth_type(next_type) {
                next_type += 1;
                let definition = by_name.get(&DefinitionName::Type(name.to_string()));
                if let Some(definition) = definition {
                    schema_document_definition(definition)
                        .serialize(ctx, &mut found, self.level, 0)?;
                }
            }

            while let Some(name) = reachable.nth_directive(next_directive) {
                next_directive += 1;
                let definition = by_name.get(&DefinitionName::Directive(name.to_string()));
                if let Some(definition) = definition {
                    schema_document_definition(definition)
                        .serialize(ctx, &mut found, self.level, 0)?;
                }
            }

            reachable.merge(found);
        }

        Ok(reachable)
    }

    fn render(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        block: &dyn Block,
    ) -> Result<String> {
        let used = text_length(&ctx.indent(self.level));
        block.serialize(ctx, collector, self.level, used)
    }

    /// First pass: walk from the root operation types (and the `schema`
    /// definition) to find what is reachable. Second pass: render just that,
    /// into the caller's collector.
    fn render_schema(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        schema: &Schema,
    ) -> Result<String> {
        let definitions = lowering::schema_definitions(schema, &self.settings);

        let selected: Vec<&LoweredDefinition> = if self.settings.print_unused_definitions() {
            definitions.iter().collect()
        } else {
            let mut seed = Collector::default();
            for kind in [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription] {
                if let Some(type_name) = schema.operation_type_name(kind) {
                    seed.add_type(type_name);
                }
            }
            for def in &definitions {
                if def.name == DefinitionName::Schema {
                    schema_document_definition(&def.definition)
                        .serialize(ctx, &mut seed, self.level, 0)?;
                }
            }

            let reachable = self.reachable(ctx, &definitions, seed)?;
            log::debug!(
                "Reachable from the root operation types: {} type(s), {} directive(s)",
                reachable.type_count(),
                reachable.directive_count(),
            );

            definitions
                .iter()
                .filter(|def| is_reachable(&reachable, &def.name))
                .collect()
        };
        log::debug!(
            "Printing {} of {} schema definition(s)",
            selected.len(),
            definitions.len(),
        );

        let blocks: Vec<BoxedBlock<'_>> = selected
            .into_iter()
            .map(|def| schema_document_definition(&def.definition))
            .collect();
        self.render(
            ctx,
            collector,
            &ListBlock::document(blocks).normalized(self.settings.normalize_schema()),
        )
    }
}

fn is_reachable(reachable: &Collector, name: &DefinitionName) -> bool {
    match name {
        DefinitionName::Directive(name) => reachable.uses_directive(name),
        DefinitionName::Schema => true,
        DefinitionName::Type(name) => reachable.uses_type(name),
    }
}
