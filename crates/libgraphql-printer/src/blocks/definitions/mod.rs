//! [`Definition`](crate::blocks::Definition)s for every construct that is
//! rendered as a [`DefinitionBlock`](crate::blocks::DefinitionBlock).

mod directive_definition;
mod enum_value_definition;
mod field_definition;
mod fragment_definition;
mod input_value_definition;
mod operation_definition;
mod schema_definition;
mod selection;
mod type_definition;
mod variable_definition;

pub(crate) use directive_definition::DirectiveDefinition;
pub(crate) use enum_value_definition::EnumValueDefinition;
pub(crate) use field_definition::FieldDefinition;
pub(crate) use fragment_definition::FragmentDefinition;
pub(crate) use input_value_definition::InputValueDefinition;
pub(crate) use operation_definition::OperationDefinition;
pub(crate) use schema_definition::SchemaDefinition;
pub(crate) use selection::SelectionSetBlock;
pub(crate) use selection::selection_block;
pub(crate) use type_definition::TypeDefinition;
pub(crate) use variable_definition::VariableDefinition;

use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::DefinitionBlock;
use crate::blocks::ListBlock;
use crate::context::Context;

/// `(a: Int, b: String)` as declared by a field or a directive definition.
fn argument_definitions<'a>(
    ctx: &Context<'_>,
    arguments: &'a [ast::schema::InputValue],
) -> Option<BoxedBlock<'a>> {
    if arguments.is_empty() {
        return None;
    }

    let settings = ctx.settings();
    let arguments: Vec<BoxedBlock<'a>> = arguments
        .iter()
        .map(|argument| DefinitionBlock::boxed(InputValueDefinition::new(argument)))
        .collect();

    Some(Box::new(
        ListBlock::wrapped("(", ")", arguments)
            .always_multiline(settings.always_multiline_arguments())
            .blank_lines(true)
            .normalized(settings.normalize_arguments()),
    ))
}
