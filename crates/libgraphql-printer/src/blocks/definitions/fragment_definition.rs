use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::NamedTypeBlock;
use crate::blocks::definitions::SelectionSetBlock;
use crate::blocks::directive_list;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// `fragment Name on Type { ... }`
pub(crate) struct FragmentDefinition<'a> {
    def: &'a ast::query::FragmentDefinition,
}
impl<'a> FragmentDefinition<'a> {
    pub fn new(def: &'a ast::query::FragmentDefinition) -> Self {
        Self { def }
    }

    fn type_condition(&self) -> &str {
        let ast::query::TypeCondition::On(type_name) = &self.def.type_condition;
        type_name.as_str()
    }
}
impl Definition for FragmentDefinition<'_> {
    fn keyword(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("fragment"))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.def.name.as_str())
    }

    fn type_separator(&self) -> &'static str {
        " on"
    }

    fn type_reference(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(Some(Box::new(NamedTypeBlock::new(self.type_condition()))))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.def.directives))
    }

    fn fields(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(Some(Box::new(SelectionSetBlock::new(
            &self.def.selection_set,
            Some(self.type_condition().to_string()),
            1,
        ))))
    }

    fn requires_fields(&self) -> bool {
        true
    }
}
