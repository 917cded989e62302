use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::TypeReferenceBlock;
use crate::blocks::ValueBlock;
use crate::blocks::directive_list;
use crate::context::Context;
use crate::print_error::Result;
use crate::types::TypeAnnotation;
use std::borrow::Cow;

/// An argument definition or an input object field: `name: Type = default`.
pub(crate) struct InputValueDefinition<'a> {
    value: &'a ast::schema::InputValue,
}
impl<'a> InputValueDefinition<'a> {
    pub fn new(value: &'a ast::schema::InputValue) -> Self {
        Self { value }
    }
}
impl Definition for InputValueDefinition<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.value.name.as_str())
    }

    fn description(&self) -> Option<&str> {
        self.value.description.as_deref()
    }

    fn type_reference(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(Some(Box::new(TypeReferenceBlock::new(&self.value.value_type))))
    }

    fn default_value(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(self.value.default_value.as_ref().map(|default_value| {
            Box::new(ValueBlock::new(
                default_value,
                Some(TypeAnnotation::from_ast_type(&self.value.value_type)),
                1,
            )) as BoxedBlock<'_>
        }))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.value.directives))
    }
}
