use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::directive_list;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

pub(crate) struct EnumValueDefinition<'a> {
    value: &'a ast::schema::EnumValue,
}
impl<'a> EnumValueDefinition<'a> {
    pub fn new(value: &'a ast::schema::EnumValue) -> Self {
        Self { value }
    }
}
impl Definition for EnumValueDefinition<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.value.name.as_str())
    }

    fn description(&self) -> Option<&str> {
        self.value.description.as_deref()
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.value.directives))
    }
}
