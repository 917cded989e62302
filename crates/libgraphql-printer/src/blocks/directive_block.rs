use crate::ast;
use crate::blocks::ArgumentBlock;
use crate::blocks::ArgumentTypeLookup;
use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::ListBlock;
use crate::blocks::text_length;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// A directive invocation such as `@deprecated(reason: "...")`.
pub(crate) struct DirectiveBlock<'a> {
    directive: &'a ast::operation::Directive,
}
impl<'a> DirectiveBlock<'a> {
    pub fn new(directive: &'a ast::operation::Directive) -> Self {
        Self { directive }
    }
}
impl Block for DirectiveBlock<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.directive.name.as_str())
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String> {
        let name = self.directive.name.as_str();
        if !ctx.is_directive_allowed(name) {
            return Ok(String::new());
        }

        // Fails when a schema is attached but doesn't define the directive.
        ctx.get_directive(name)?;
        collector.add_directive(name);

        let head = format!("@{name}");
        let settings = ctx.settings();
        let arguments: Vec<BoxedBlock<'_>> = self.directive.arguments
            .iter()
            .map(|(argument_name, value)| Box::new(ArgumentBlock::new(
                argument_name,
                value,
                ArgumentTypeLookup::Directive(name),
                1,
            )) as BoxedBlock<'_>)
            .collect();
        let arguments = ListBlock::wrapped("(", ")", arguments)
            .always_multiline(settings.always_multiline_arguments())
            .normalized(settings.normalize_arguments())
            .serialize(ctx, collector, level, used + text_length(&head))?;

        Ok(head + &arguments)
    }
}

/// The directives annotating a definition, one per line at the current
/// level. `None` when there are none to print.
pub(crate) fn directive_list(
    directives: &[ast::operation::Directive],
) -> Option<BoxedBlock<'_>> {
    if directives.is_empty() {
        return None;
    }

    let directives: Vec<BoxedBlock<'_>> = directives
        .iter()
        .map(|directive| Box::new(DirectiveBlock::new(directive)) as BoxedBlock<'_>)
        .collect();
    Some(Box::new(ListBlock::stacked(directives).always_multiline(true)))
}
