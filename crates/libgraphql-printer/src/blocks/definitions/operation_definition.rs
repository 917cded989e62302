use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::DefinitionBlock;
use crate::blocks::ListBlock;
use crate::blocks::definitions::SelectionSetBlock;
use crate::blocks::definitions::VariableDefinition;
use crate::blocks::directive_list;
use crate::context::Context;
use crate::print_error::Result;
use crate::schema::OperationKind;
use std::borrow::Cow;

/// A query, mutation or subscription. The `{ ... }` shorthand has no kind.
pub(crate) struct OperationDefinition<'a> {
    directives: &'a [ast::operation::Directive],
    kind: Option<OperationKind>,
    name: Option<&'a str>,
    selection_set: &'a ast::query::SelectionSet,
    variable_definitions: &'a [ast::query::VariableDefinition],
}
impl<'a> OperationDefinition<'a> {
    pub fn new(def: &'a ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition as Op;
        match def {
            Op::Mutation(op) => Self {
                directives: &op.directives,
                kind: Some(OperationKind::Mutation),
                name: op.name.as_deref(),
                selection_set: &op.selection_set,
                variable_definitions: &op.variable_definitions,
            },
            Op::Query(op) => Self {
                directives: &op.directives,
                kind: Some(OperationKind::Query),
                name: op.name.as_deref(),
                selection_set: &op.selection_set,
                variable_definitions: &op.variable_definitions,
            },
            Op::SelectionSet(selection_set) => Self {
                directives: &[],
                kind: None,
                name: None,
                selection_set,
                variable_definitions: &[],
            },
            Op::Subscription(op) => Self {
                directives: &op.directives,
                kind: Some(OperationKind::Subscription),
                name: op.name.as_deref(),
                selection_set: &op.selection_set,
                variable_definitions: &op.variable_definitions,
            },
        }
    }
}
impl Definition for OperationDefinition<'_> {
    fn keyword(&self) -> Option<Cow<'_, str>> {
        self.kind.map(|kind| Cow::Borrowed(kind.keyword()))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.unwrap_or_default())
    }

    fn arguments(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        if self.variable_definitions.is_empty() {
            return Ok(None);
        }

        let settings = ctx.settings();
        let variables: Vec<BoxedBlock<'_>> = self.variable_definitions
            .iter()
            .map(|variable| DefinitionBlock::boxed(VariableDefinition::new(variable)))
            .collect();

        Ok(Some(Box::new(
            ListBlock::wrapped("(", ")", variables)
                .always_multiline(settings.always_multiline_arguments())
                .normalized(settings.normalize_arguments()),
        )))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(self.directives))
    }

    fn fields(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        let kind = self.kind.unwrap_or(OperationKind::Query);
        let root_type = ctx.get_operation_type_name(kind)?;

        Ok(Some(Box::new(SelectionSetBlock::new(
            self.selection_set,
            root_type.map(str::to_string),
            1,
        ))))
    }

    fn requires_fields(&self) -> bool {
        true
    }
}
