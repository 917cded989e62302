use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::TypeReferenceBlock;
use crate::blocks::definitions::argument_definitions;
use crate::blocks::directive_list;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// `name(arguments): Type` inside an object or interface type.
pub(crate) struct FieldDefinition<'a> {
    field: &'a ast::schema::Field,
}
impl<'a> FieldDefinition<'a> {
    pub fn new(field: &'a ast::schema::Field) -> Self {
        Self { field }
    }
}
impl Definition for FieldDefinition<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.field.name.as_str())
    }

    fn description(&self) -> Option<&str> {
        self.field.description.as_deref()
    }

    fn arguments(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(argument_definitions(ctx, &self.field.arguments))
    }

    fn type_reference(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(Some(Box::new(TypeReferenceBlock::new(&self.field.field_type))))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.field.directives))
    }
}
