use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::TypeReferenceBlock;
use crate::blocks::ValueBlock;
use crate::context::Context;
use crate::print_error::Result;
use crate::types::TypeAnnotation;
use std::borrow::Cow;

/// `$name: Type = default` in an operation's variable list.
pub(crate) struct VariableDefinition<'a> {
    def: &'a ast::query::VariableDefinition,
}
impl<'a> VariableDefinition<'a> {
    pub fn new(def: &'a ast::query::VariableDefinition) -> Self {
        Self { def }
    }
}
impl Definition for VariableDefinition<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("${}", self.def.name))
    }

    fn type_reference(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(Some(Box::new(TypeReferenceBlock::new(&self.def.var_type))))
    }

    fn default_value(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(self.def.default_value.as_ref().map(|default_value| {
            Box::new(ValueBlock::new(
                default_value,
                Some(TypeAnnotation::from_ast_type(&self.def.var_type)),
                1,
            )) as BoxedBlock<'_>
        }))
    }
}
