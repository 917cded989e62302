use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::ListBlock;
use crate::blocks::NameBlock;
use crate::blocks::definitions::argument_definitions;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// `directive @name(arguments) repeatable on LOCATION | ...`
pub(crate) struct DirectiveDefinition<'a> {
    def: &'a ast::schema::DirectiveDefinition,
}
impl<'a> DirectiveDefinition<'a> {
    pub fn new(def: &'a ast::schema::DirectiveDefinition) -> Self {
        Self { def }
    }
}
impl Definition for DirectiveDefinition<'_> {
    fn keyword(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("directive"))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("@{}", self.def.name))
    }

    fn description(&self) -> Option<&str> {
        self.def.description.as_deref()
    }

    fn is_allowed(&self, ctx: &Context<'_>) -> Result<bool> {
        Ok(ctx.is_directive_definition_allowed(&self.def.name))
    }

    fn register(&self, _ctx: &Context<'_>, collector: &mut Collector) -> Result<()> {
        collector.add_directive(&self.def.name);
        Ok(())
    }

    fn arguments(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(argument_definitions(ctx, &self.def.arguments))
    }

    fn body(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        let settings = ctx.settings();
        let keyword = if self.def.repeatable {
            "repeatable on"
        } else {
            "on"
        };
        let locations: Vec<BoxedBlock<'_>> = self.def.locations
            .iter()
            .map(|location| Box::new(NameBlock::new(location.as_str())) as BoxedBlock<'_>)
            .collect();

        Ok(Some(Box::new(
            ListBlock::sigil(keyword, "|", locations)
                .always_multiline(settings.always_multiline_directive_locations())
                .normalized(settings.normalize_directive_locations()),
        )))
    }
}
