mod argument_block;
mod block;
mod definition_block;
pub(crate) mod definitions;
mod description_block;
mod directive_block;
mod factory;
mod list_block;
mod name_block;
mod string_block;
mod type_reference_block;
mod value_block;

pub(crate) use argument_block::ArgumentBlock;
pub(crate) use argument_block::ArgumentTypeLookup;
pub(crate) use block::Block;
pub(crate) use block::BoxedBlock;
pub(crate) use block::column_after;
pub(crate) use block::text_length;
pub(crate) use definition_block::Definition;
pub(crate) use definition_block::DefinitionBlock;
pub(crate) use description_block::DescriptionBlock;
pub(crate) use directive_block::DirectiveBlock;
pub(crate) use directive_block::directive_list;
pub(crate) use factory::Node;
pub(crate) use factory::schema_document_definition;
pub(crate) use list_block::ListBlock;
pub(crate) use name_block::NameBlock;
pub(crate) use string_block::StringBlock;
pub(crate) use type_reference_block::NamedTypeBlock;
pub(crate) use type_reference_block::TypeReferenceBlock;
pub(crate) use value_block::ValueBlock;

#[cfg(test)]
mod tests;
