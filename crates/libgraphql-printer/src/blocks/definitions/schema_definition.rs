use crate::ast;
use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::ListBlock;
use crate::blocks::NamedTypeBlock;
use crate::blocks::directive_list;
use crate::blocks::text_length;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use crate::schema::OperationKind;
use std::borrow::Cow;

/// `schema { query: Query ... }`. Suppressed when none of its root
/// operation types may be printed.
pub(crate) struct SchemaDefinition<'a> {
    def: &'a ast::schema::SchemaDefinition,
}
impl<'a> SchemaDefinition<'a> {
    pub fn new(def: &'a ast::schema::SchemaDefinition) -> Self {
        Self { def }
    }
}
impl Definition for SchemaDefinition<'_> {
    fn keyword(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("schema"))
    }

    // Sorts ahead of every other definition.
    fn sort_key(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(&self.def.directives))
    }

    fn fields(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        let root_types = [
            (OperationKind::Query, &self.def.query),
            (OperationKind::Mutation, &self.def.mutation),
            (OperationKind::Subscription, &self.def.subscription),
        ];
        let root_types: Vec<BoxedBlock<'_>> = root_types
            .into_iter()
            .filter_map(|(kind, type_name)| {
                type_name.as_deref().map(|type_name| {
                    Box::new(RootOperationType { kind, type_name }) as BoxedBlock<'_>
                })
            })
            .collect();

        Ok(Some(Box::new(ListBlock::wrapped("{", "}", root_types).always_multiline(true))))
    }

    fn requires_fields(&self) -> bool {
        true
    }
}

/// `query: Query`
struct RootOperationType<'a> {
    kind: OperationKind,
    type_name: &'a str,
}
impl Block for RootOperationType<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.keyword())
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String> {
        let prefix = format!("{}:{}", self.kind.keyword(), ctx.space());
        let type_name = NamedTypeBlock::new(self.type_name)
            .serialize(ctx, collector, level, used + text_length(&prefix))?;
        if type_name.is_empty() {
            return Ok(String::new());
        }

        Ok(prefix + &type_name)
    }
}
