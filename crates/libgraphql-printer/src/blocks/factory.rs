use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::DefinitionBlock;
use crate::blocks::DirectiveBlock;
use crate::blocks::ListBlock;
use crate::blocks::TypeReferenceBlock;
use crate::blocks::ValueBlock;
use crate::blocks::definitions::DirectiveDefinition;
use crate::blocks::definitions::EnumValueDefinition;
use crate::blocks::definitions::FieldDefinition;
use crate::blocks::definitions::FragmentDefinition;
use crate::blocks::definitions::InputValueDefinition;
use crate::blocks::definitions::OperationDefinition;
use crate::blocks::definitions::SchemaDefinition;
use crate::blocks::definitions::SelectionSetBlock;
use crate::blocks::definitions::TypeDefinition;
use crate::blocks::definitions::VariableDefinition;
use crate::blocks::definitions::selection_block;
use crate::settings::Settings;
use crate::types::TypeAnnotation;

/// A borrowed syntax-tree node that can be rendered on its own.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Node<'a> {
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
    Value(&'a ast::operation::Value, Option<&'a TypeAnnotation>),
    VariableDefinition(&'a ast::query::VariableDefinition),
}
impl<'a> Node<'a> {
    pub fn into_block(self, settings: &Settings) -> BoxedBlock<'a> {
        match self {
            Node::DirectiveAnnotation(directive) =>
                Box::new(DirectiveBlock::new(directive)),
            Node::DirectiveDefinition(def) =>
                DefinitionBlock::boxed(DirectiveDefinition::new(def)),
            Node::EnumValueDefinition(value) =>
                DefinitionBlock::boxed(EnumValueDefinition::new(value)),
            Node::ExecutableDefinition(def) =>
                executable_definition(def),
            Node::ExecutableDocument(doc) =>
                Box::new(ListBlock::document(
                    doc.definitions.iter().map(executable_definition).collect(),
                )),
            Node::FieldDefinition(field) =>
                DefinitionBlock::boxed(FieldDefinition::new(field)),
            Node::FragmentDefinition(def) =>
                DefinitionBlock::boxed(FragmentDefinition::new(def)),
            Node::InputValueDefinition(value) =>
                DefinitionBlock::boxed(InputValueDefinition::new(value)),
            Node::OperationDefinition(def) =>
                DefinitionBlock::boxed(OperationDefinition::new(def)),
            Node::SchemaDefinition(def) =>
                DefinitionBlock::boxed(SchemaDefinition::new(def)),
            Node::SchemaDocument(doc) =>
                schema_document(doc, settings),
            Node::SchemaDocumentDefinition(def) =>
                schema_document_definition(def),
            Node::Selection(selection) =>
                selection_block(selection, None, 1),
            Node::SelectionSet(selection_set) =>
                Box::new(SelectionSetBlock::new(selection_set, None, 1)),
            Node::TypeDefinition(def) =>
                DefinitionBlock::boxed(TypeDefinition::from_definition(def)),
            Node::TypeExtension(ext) =>
                DefinitionBlock::boxed(TypeDefinition::from_extension(ext)),
            Node::TypeReference(type_) =>
                Box::new(TypeReferenceBlock::new(type_)),
            Node::Value(value, expected) =>
                Box::new(ValueBlock::new(value, expected.cloned(), 1)),
            Node::VariableDefinition(def) =>
                DefinitionBlock::boxed(VariableDefinition::new(def)),
        }
    }
}

fn executable_definition(def: &ast::query::Definition) -> BoxedBlock<'_> {
    match def {
        ast::query::Definition::Fragment(def) =>
            DefinitionBlock::boxed(FragmentDefinition::new(def)),
        ast::query::Definition::Operation(def) =>
            DefinitionBlock::boxed(OperationDefinition::new(def)),
    }
}

pub(crate) fn schema_document_definition(def: &ast::schema::Definition) -> BoxedBlock<'_> {
    match def {
        ast::schema::Definition::DirectiveDefinition(def) =>
            DefinitionBlock::boxed(DirectiveDefinition::new(def)),
        ast::schema::Definition::SchemaDefinition(def) =>
            DefinitionBlock::boxed(SchemaDefinition::new(def)),
        ast::schema::Definition::TypeDefinition(def) =>
            DefinitionBlock::boxed(TypeDefinition::from_definition(def)),
        ast::schema::Definition::TypeExtension(ext) =>
            DefinitionBlock::boxed(TypeDefinition::from_extension(ext)),
    }
}

/// Schema definitions first, then directive definitions, then types and
/// extensions in source order (or everything sorted by keyword and name
/// when the schema is normalized).
fn schema_document<'a>(doc: &'a ast::schema::Document, settings: &Settings) -> BoxedBlock<'a> {
    let rank = |def: &ast::schema::Definition| match def {
        ast::schema::Definition::SchemaDefinition(_) => 0,
        ast::schema::Definition::DirectiveDefinition(_) => 1,
        ast::schema::Definition::TypeDefinition(_)
            | ast::schema::Definition::TypeExtension(_) => 2,
    };

    let mut definitions: Vec<&ast::schema::Definition> = doc.definitions
        .iter()
        .filter(|def| {
            settings.print_directive_definitions()
                || !matches!(def, ast::schema::Definition::DirectiveDefinition(_))
        })
        .collect();
    definitions.sort_by_key(|def| rank(def));

    Box::new(
        ListBlock::document(
            definitions.into_iter().map(schema_document_definition).collect(),
        ).normalized(settings.normalize_schema()),
    )
}
