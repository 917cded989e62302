use crate::ast;
use crate::blocks::ArgumentBlock;
use crate::blocks::ArgumentTypeLookup;
use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::ListBlock;
use crate::blocks::StringBlock;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::PrintError;
use crate::print_error::Result;
use crate::types::TypeAnnotation;

/// A value literal, optionally typed by the input type it is given for.
///
/// `depth` counts the literal nesting above this value (starting at 1) and
/// is checked against [`Settings::max_depth`](crate::Settings::max_depth).
pub(crate) struct ValueBlock<'a> {
    depth: usize,
    expected: Option<TypeAnnotation>,
    value: &'a ast::operation::Value,
}
impl<'a> ValueBlock<'a> {
    pub fn new(
        value: &'a ast::operation::Value,
        expected: Option<TypeAnnotation>,
        depth: usize,
    ) -> Self {
        Self {
            depth,
            expected,
            value,
        }
    }
}
impl Block for ValueBlock<'_> {
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

        if let Some(expected) = &self.expected {
            let type_name = expected.innermost_type_name();
            if !ctx.is_type_allowed(type_name) {
                return Ok(String::new());
            }
            collector.add_type(type_name);
        }

        use ast::operation::Value;
        Ok(match self.value {
            Value::Boolean(value) => value.to_string(),
            Value::Enum(name) => name.to_string(),
            Value::Float(value) => format!("{value:?}"),
            Value::Int(number) => number.as_i64().unwrap_or_default().to_string(),
            Value::Null => "null".to_string(),
            Value::String(value) =>
                StringBlock::new(value).serialize(ctx, collector, level, used)?,
            Value::Variable(name) => format!("${name}"),

            Value::List(items) => {
                let item_type = self.expected
                    .as_ref()
                    .map(|expected| expected.item_type_annotation().clone());
                let items: Vec<BoxedBlock<'_>> = items.iter().map(|item| {
                    Box::new(ValueBlock::new(item, item_type.clone(), self.depth + 1))
                        as BoxedBlock<'_>
                }).collect();

                ListBlock::wrapped("[", "]", items)
                    .empty("[]")
                    .serialize(ctx, collector, level, used)?
            },

            Value::Object(fields) => {
                let type_name = self.expected
                    .as_ref()
                    .map(|expected| expected.innermost_type_name().to_string());
                let fields: Vec<BoxedBlock<'_>> = fields.iter().map(|(name, value)| {
                    Box::new(ArgumentBlock::new(
                        name,
                        value,
                        ArgumentTypeLookup::InputObject(type_name.clone()),
                        self.depth + 1,
                    )) as BoxedBlock<'_>
                }).collect();

                ListBlock::wrapped("{", "}", fields)
                    .always_multiline(settings.always_multiline_arguments())
                    .empty("{}")
                    .normalized(settings.normalize_arguments())
                    .serialize(ctx, collector, level, used)?
            },
        })
    }
}
