use crate::ast;
use crate::blocks::ArgumentBlock;
use crate::blocks::ArgumentTypeLookup;
use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::DefinitionBlock;
use crate::blocks::ListBlock;
use crate::blocks::NamedTypeBlock;
use crate::blocks::directive_list;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::PrintError;
use crate::print_error::Result;
use crate::types::TypeAnnotation;
use std::borrow::Cow;

/// Builds the block for one selection. `parent_type` is the type the
/// selection is made on, when it is known.
pub(crate) fn selection_block(
    selection: &ast::query::Selection,
    parent_type: Option<String>,
    depth: usize,
) -> BoxedBlock<'_> {
    match selection {
        ast::query::Selection::Field(field) =>
            DefinitionBlock::boxed(FieldSelection { depth, field, parent_type }),
        ast::query::Selection::FragmentSpread(spread) =>
            DefinitionBlock::boxed(FragmentSpread { spread }),
        ast::query::Selection::InlineFragment(fragment) =>
            DefinitionBlock::boxed(InlineFragment { depth, fragment, parent_type }),
    }
}

/// `{ ... }` of an operation, fragment or field.
pub(crate) struct SelectionSetBlock<'a> {
    depth: usize,
    parent_type: Option<String>,
    selection_set: &'a ast::query::SelectionSet,
}
impl<'a> SelectionSetBlock<'a> {
    pub fn new(
        selection_set: &'a ast::query::SelectionSet,
        parent_type: Option<String>,
        depth: usize,
    ) -> Self {
        Self {
            depth,
            parent_type,
            selection_set,
        }
    }
}
impl Block for SelectionSetBlock<'_> {
    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String> {
        let settings = ctx.settings();
        if self.depth > settings.max_depth() {
            return Err(PrintError::DepthLimitExceeded {
                max_depth: settings.max_depth(),
            });
        }

        let selections: Vec<BoxedBlock<'_>> = self.selection_set.items
            .iter()
            .map(|selection| {
                selection_block(selection, self.parent_type.clone(), self.depth)
            })
            .collect();

        ListBlock::wrapped("{", "}", selections)
            .always_multiline(true)
            .normalized(settings.normalize_fields())
            .serialize(ctx, collector, level, used)
    }
}

/// `alias: name(arguments) { ... }`
struct FieldSelection<'a> {
    depth: usize,
    field: &'a ast::query::Field,
    parent_type: Option<String>,
}
impl FieldSelection<'_> {
    /// Declared type of the selected field. Meta fields other than
    /// `__typename` are untyped.
    fn field_type<'c>(&self, ctx: &Context<'c>) -> Result<Option<&'c TypeAnnotation>> {
        let name = self.field.name.as_str();
        if name == "__typename" {
            return ctx.get_field_type("", name);
        }
        match &self.parent_type {
            Some(parent_type) if !name.starts_with("__") =>
                ctx.get_field_type(parent_type, name),
            _ => Ok(None),
        }
    }
}
impl Definition for FieldSelection<'_> {
    fn keyword(&self) -> Option<Cow<'_, str>> {
        self.field.alias
            .as_ref()
            .map(|alias| Cow::Owned(format!("{alias}:")))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.field.name.as_str())
    }

    fn is_allowed(&self, ctx: &Context<'_>) -> Result<bool> {
        Ok(self.field_type(ctx)?.is_none_or(|field_type| {
            ctx.is_type_allowed(field_type.innermost_type_name())
        }))
    }

    fn register(&self, ctx: &Context<'_>, collector: &mut Collector) -> Result<()> {
        if let Some(field_type) = self.field_type(ctx)? {
            collector.add_type(field_type.innermost_type_name());
        }
        Ok(())
    }

    fn arguments(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        if self.field.arguments.is_empty() {
            return Ok(None);
        }

        let settings = ctx.settings();
        let arguments: Vec<BoxedBlock<'_>> = self.field.arguments
            .iter()
            .map(|(name, value)| Box::new(ArgumentBlock::new(
                name,
                value,
                ArgumentTypeLookup::Field {
                    type_name: self.parent_type.clone(),
                    field_name: &self.field.name,
                },
                1,
            )) as BoxedBlock<'_>)
            .collect();

        Ok(Some(Box::new(
            ListBlock::wrapped("(", ")", arguments)
                .always_multiline(settings.always_multiline_arguments())
                .normalized(settings.normalize_arguments()),
        )))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.field.directives))
    }

    fn fields(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        if self.field.selection_set.items.is_empty() {
            return Ok(None);
        }

        let field_type = self.field_type(ctx)?
            .map(|field_type| field_type.innermost_type_name().to_string());
        Ok(Some(Box::new(SelectionSetBlock::new(
            &self.field.selection_set,
            field_type,
            self.depth + 1,
        ))))
    }

    fn requires_fields(&self) -> bool {
        !self.field.selection_set.items.is_empty()
    }
}

/// `...Name`
struct FragmentSpread<'a> {
    spread: &'a ast::query::FragmentSpread,
}
impl Definition for FragmentSpread<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("...{}", self.spread.fragment_name))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.spread.directives))
    }
}

/// `... on Type { ... }`, or `... { ... }` without a type condition.
struct InlineFragment<'a> {
    depth: usize,
    fragment: &'a ast::query::InlineFragment,
    parent_type: Option<String>,
}
impl InlineFragment<'_> {
    fn type_condition(&self) -> Option<&str> {
        self.fragment.type_condition
            .as_ref()
            .map(|ast::query::TypeCondition::On(type_name)| type_name.as_str())
    }
}
impl Definition for InlineFragment<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("...")
    }

    fn sort_key(&self) -> Cow<'_, str> {
        match self.type_condition() {
            Some(type_name) => Cow::Owned(format!("... on {type_name}")),
            None => Cow::Borrowed("..."),
        }
    }

    fn type_separator(&self) -> &'static str {
        " on"
    }

    fn type_reference(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(self.type_condition().map(|type_name| {
            Box::new(NamedTypeBlock::new(type_name)) as BoxedBlock<'_>
        }))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.fragment.directives))
    }

    fn fields(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        let parent_type = self.type_condition()
            .map(str::to_string)
            .or_else(|| self.parent_type.clone());
        Ok(Some(Box::new(SelectionSetBlock::new(
            &self.fragment.selection_set,
            parent_type,
            self.depth + 1,
        ))))
    }

    fn requires_fields(&self) -> bool {
        true
    }
}
