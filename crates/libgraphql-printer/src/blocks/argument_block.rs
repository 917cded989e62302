use crate::ast;
use crate::blocks::Block;
use crate::blocks::ValueBlock;
use crate::blocks::text_length;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use crate::types::TypeAnnotation;
use std::borrow::Cow;

/// Where the declared type of an argument (or object field) comes from.
#[derive(Clone, Debug)]
pub(crate) enum ArgumentTypeLookup<'a> {
    /// An argument passed to `@directive_name`.
    Directive(&'a str),

    /// An argument passed to a selected field. `type_name` is the parent
    /// type, when it is known.
    Field {
        type_name: Option<String>,
        field_name: &'a str,
    },

    /// A field of an input object literal.
    InputObject(Option<String>),
}
impl ArgumentTypeLookup<'_> {
    fn resolve<'c>(
        &self,
        ctx: &Context<'c>,
        argument_name: &str,
    ) -> Result<Option<&'c TypeAnnotation>> {
        match self {
            Self::Directive(directive_name) =>
                ctx.get_directive_argument_type(directive_name, argument_name),

            // Meta fields like `__type(name:)` have no declared arguments.
            Self::Field { type_name: Some(type_name), field_name }
                if !field_name.starts_with("__") =>
                ctx.get_field_argument_type(type_name, field_name, argument_name),

            Self::InputObject(Some(type_name)) =>
                ctx.get_field_type(type_name, argument_name),

            Self::Field { .. } | Self::InputObject(None) => Ok(None),
        }
    }
}

/// `name: value`, used for arguments and for the fields of object literals.
/// Renders empty when the declared type of the value is not allowed.
pub(crate) struct ArgumentBlock<'a> {
    depth: usize,
    lookup: ArgumentTypeLookup<'a>,
    name: &'a str,
    value: &'a ast::operation::Value,
}
impl<'a> ArgumentBlock<'a> {
    pub fn new(
        name: &'a str,
        value: &'a ast::operation::Value,
        lookup: ArgumentTypeLookup<'a>,
        depth: usize,
    ) -> Self {
        Self {
            depth,
            lookup,
            name,
            value,
        }
    }
}
impl Block for ArgumentBlock<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String> {
        let expected = self.lookup.resolve(ctx, self.name)?;
        if expected.is_some_and(|expected| {
            !ctx.is_type_allowed(expected.innermost_type_name())
        }) {
            return Ok(String::new());
        }

        let prefix = format!("{}:{}", self.name, ctx.space());
        let value = ValueBlock::new(self.value, expected.cloned(), self.depth)
            .serialize(ctx, collector, level, used + text_length(&prefix))?;
        if value.is_empty() {
            return Ok(String::new());
        }

        Ok(prefix + &value)
    }
}
