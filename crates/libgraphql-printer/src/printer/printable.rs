use crate::ast;
use crate::schema::Schema;
use crate::types;

/// Anything a [`Printer`](crate::Printer) knows how to render.
///
/// Syntax-tree variants borrow [`graphql_parser`] nodes (see [`crate::ast`]);
/// the remaining variants borrow the resolved type system.
#[derive(Clone, Copy, Debug)]
pub enum Printable<'a> {
    DirectiveAnnotation(&'a ast::operation::Directive),
    DirectiveDefinition(&'a ast::schema::DirectiveDefinition),
    EnumValueDefinition(&'a ast::schema::EnumValue),
    ExecutableDefinition(&'a ast::query::Definition),
    ExecutableDocument(&'a ast::query::Document),
    FieldDefinition(&'a ast::schema::Field),
    FragmentDefinition(&'a ast::query::FragmentDefinition),
    InputValueDefinition(&'a ast::schema::InputValue),
    OperationDefinition(&'a ast::query::OperationDefinition),
    SchemaDefinition(&'a ast::schema::SchemaDefinition),
    SchemaDocument(&'a ast::schema::Document),
    SchemaDocumentDefinition(&'a ast::schema::Definition),
    Selection(&'a ast::query::Selection),
    SelectionSet(&'a ast::query::SelectionSet),
    TypeDefinition(&'a ast::schema::TypeDefinition),
    TypeExtension(&'a ast::schema::TypeExtension),
    TypeReference(&'a ast::operation::Type),
    Value(&'a ast::operation::Value),
    VariableDefinition(&'a ast::query::VariableDefinition),

    Directive(&'a types::Directive),
    EnumValue(&'a types::EnumValue),
    Field(&'a types::Field),
    GraphQLType(&'a types::GraphQLType),
    InputField(&'a types::InputField),
    Parameter(&'a types::Parameter),
    Schema(&'a Schema),
}

macro_rules! printable_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $source> for Printable<'a> {
                fn from(value: &'a $source) -> Self {
                    Printable::$variant(value)
                }
            }
        )*
    };
}

printable_from!(
    ast::operation::Directive => DirectiveAnnotation,
    ast::operation::Type => TypeReference,
    ast::operation::Value => Value,
    ast::query::Definition => ExecutableDefinition,
    ast::query::Document => ExecutableDocument,
    ast::query::FragmentDefinition => FragmentDefinition,
    ast::query::OperationDefinition => OperationDefinition,
    ast::query::Selection => Selection,
    ast::query::SelectionSet => SelectionSet,
    ast::query::VariableDefinition => VariableDefinition,
    ast::schema::Definition => SchemaDocumentDefinition,
    ast::schema::DirectiveDefinition => DirectiveDefinition,
    ast::schema::Document => SchemaDocument,
    ast::schema::EnumValue => EnumValueDefinition,
    ast::schema::Field => FieldDefinition,
    ast::schema::InputValue => InputValueDefinition,
    ast::schema::SchemaDefinition => SchemaDefinition,
    ast::schema::TypeDefinition => TypeDefinition,
    ast::schema::TypeExtension => TypeExtension,
    types::Directive => Directive,
    types::EnumValue => EnumValue,
    types::Field => Field,
    types::GraphQLType => GraphQLType,
    types::InputField => InputField,
    types::Parameter => Parameter,
    Schema => Schema,
);
