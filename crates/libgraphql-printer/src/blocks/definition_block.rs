use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::DescriptionBlock;
use crate::blocks::column_after;
use crate::blocks::text_length;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// The parts a definition is assembled from. Every part is optional; a
/// [`DefinitionBlock`] lays them out in this order:
///
/// ```text
/// """description"""
/// keyword name(arguments): type = default body
/// @directives
/// fields
/// ```
pub(crate) trait Definition {
    /// E.g. `type`, `extend union` or `query`.
    fn keyword(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    /// Key used when a list of definitions is normalized.
    fn sort_key(&self) -> Cow<'_, str> {
        match (self.keyword(), self.name()) {
            (Some(keyword), name) if !name.is_empty() =>
                Cow::Owned(format!("{keyword} {name}")),
            (Some(keyword), _) => keyword,
            (None, name) => name,
        }
    }

    fn description(&self) -> Option<&str> {
        None
    }

    /// Checked before anything is rendered. A disallowed definition renders
    /// empty and registers nothing.
    fn is_allowed(&self, _ctx: &Context<'_>) -> Result<bool> {
        Ok(true)
    }

    /// Records the name this definition declares, if it declares one.
    fn register(&self, _ctx: &Context<'_>, _collector: &mut Collector) -> Result<()> {
        Ok(())
    }

    fn arguments(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(None)
    }

    /// Text between the arguments and the type, before the space.
    fn type_separator(&self) -> &'static str {
        ":"
    }

    /// A type that renders empty suppresses the whole definition.
    fn type_reference(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(None)
    }

    fn default_value(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(None)
    }

    fn body(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(None)
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(None)
    }

    fn fields(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(None)
    }

    /// Whether the definition is suppressed when its fields render empty.
    fn requires_fields(&self) -> bool {
        false
    }
}

pub(crate) struct DefinitionBlock<D>(pub D);
impl<D: Definition> DefinitionBlock<D> {
    pub fn boxed<'a>(definition: D) -> BoxedBlock<'a> where D: 'a {
        Box::new(Self(definition))
    }
}
impl<D: Definition> Block for DefinitionBlock<D> {
    fn name(&self) -> Cow<'_, str> {
        self.0.sort_key()
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String> {
        let definition = &self.0;
        if !definition.is_allowed(ctx)? {
            return Ok(String::new());
        }

        let eol = ctx.eol();
        let space = ctx.space();
        let indent = ctx.indent(level);
        let indent_length = text_length(&indent);

        // Nothing reaches `collector` unless the whole definition renders.
        let mut local = Collector::default();
        definition.register(ctx, &mut local)?;

        let mut content = String::new();
        let mut used = used;
        let mut multiline = false;

        if let Some(description) = definition.description() {
            let text = DescriptionBlock::new(description)
                .serialize(ctx, &mut local, level, used)?;
            if !text.is_empty() {
                content.push_str(&text);
                content.push_str(eol);
                content.push_str(&indent);
                used = indent_length;
            }
        }

        let name = definition.name();
        let head = match definition.keyword() {
            Some(keyword) if name.is_empty() => keyword.into_owned(),
            Some(keyword) => format!("{keyword}{space}{name}"),
            None => name.into_owned(),
        };
        content.push_str(&head);
        used += text_length(&head);

        if let Some(arguments) = definition.arguments(ctx)? {
            let text = arguments.serialize(ctx, &mut local, level, used)?;
            multiline |= ctx.is_multiline(&text);
            used = column_after(ctx, used, &text);
            content.push_str(&text);
        }

        if let Some(type_reference) = definition.type_reference(ctx)? {
            let separator = format!("{}{space}", definition.type_separator());
            let column = used + text_length(&separator);
            let text = type_reference.serialize(ctx, &mut local, level, column)?;
            if text.is_empty() {
                return Ok(String::new());
            }
            content.push_str(&separator);
            content.push_str(&text);
            used = column_after(ctx, column, &text);
        }

        if let Some(default_value) = definition.default_value(ctx)? {
            let separator = format!("{space}={space}");
            let column = used + text_length(&separator);
            let text = default_value.serialize(ctx, &mut local, level, column)?;
            if !text.is_empty() {
                multiline |= ctx.is_multiline(&text);
                content.push_str(&separator);
                content.push_str(&text);
                used = column_after(ctx, column, &text);
            }
        }

        if let Some(body) = definition.body(ctx)? {
            let column = used + text_length(space);
            let text = body.serialize(ctx, &mut local, level, column)?;
            if !text.is_empty() {
                if multiline || ctx.is_multiline(&text) {
                    multiline = true;
                    content.push_str(eol);
                    content.push_str(&indent);
                    used = column_after(ctx, indent_length, &text);
                } else {
                    content.push_str(space);
                    used = column + text_length(&text);
                }
                content.push_str(&text);
            }
        }

        let directives = if ctx.settings().print_directives() {
            definition.directives(ctx)?
        } else {
            None
        };
        if let Some(directives) = directives {
            let text = directives.serialize(ctx, &mut local, level, indent_length)?;
            if !text.is_empty() {
                multiline = true;
                content.push_str(eol);
                content.push_str(&indent);
                content.push_str(&text);
                used = column_after(ctx, indent_length, &text);
            }
        }

        if let Some(fields) = definition.fields(ctx)? {
            let (separator, column) = if multiline {
                (format!("{eol}{indent}"), indent_length)
            } else if content.is_empty() {
                (String::new(), used)
            } else {
                (space.to_string(), used + text_length(space))
            };

            let text = fields.serialize(ctx, &mut local, level, column)?;
            if text.is_empty() {
                if definition.requires_fields() {
                    return Ok(String::new());
                }
            } else {
                content.push_str(&separator);
                content.push_str(&text);
            }
        } else if definition.requires_fields() {
            return Ok(String::new());
        }

        collector.merge(local);
        Ok(content)
    }
}
