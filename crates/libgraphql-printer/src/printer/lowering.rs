//! Translation of the runtime type system into owned syntax-tree nodes, so
//! that the blocks only ever render syntax trees.
//!
//! The legacy `deprecation_reason` carried by fields, arguments, input
//! fields and enum values is folded into their directive list here.

use crate::ast;
use crate::ast::synthetic_pos;
use crate::blocks::Node;
use crate::printer::Printable;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::settings::Settings;
use crate::types;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeTrait;

/// A printable, ready to be turned into a block.
pub(crate) enum Lowered<'a> {
    Node(Node<'a>),
    Owned(OwnedNode),
    Schema(&'a Schema),
}

pub(crate) enum OwnedNode {
    DirectiveDefinition(ast::schema::DirectiveDefinition),
    EnumValueDefinition(ast::schema::EnumValue),
    FieldDefinition(ast::schema::Field),
    InputValueDefinition(ast::schema::InputValue),
    TypeDefinition(ast::schema::TypeDefinition),
}
impl OwnedNode {
    pub fn node(&self) -> Node<'_> {
        match self {
            Self::DirectiveDefinition(def) => Node::DirectiveDefinition(def),
            Self::EnumValueDefinition(value) => Node::EnumValueDefinition(value),
            Self::FieldDefinition(field) => Node::FieldDefinition(field),
            Self::InputValueDefinition(value) => Node::InputValueDefinition(value),
            Self::TypeDefinition(def) => Node::TypeDefinition(def),
        }
    }
}

/// Which definition of a schema a lowered definition came from.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DefinitionName {
    Directive(String),
    Schema,
    Type(String),
}

pub(crate) struct LoweredDefinition {
    pub definition: ast::schema::Definition,
    pub name: DefinitionName,
}

pub(crate) fn lower(printable: Printable<'_>) -> Lowered<'_> {
    match printable {
        Printable::DirectiveAnnotation(directive) =>
            Lowered::Node(Node::DirectiveAnnotation(directive)),
        Printable::DirectiveDefinition(def) =>
            Lowered::Node(Node::DirectiveDefinition(def)),
        Printable::EnumValueDefinition(value) =>
            Lowered::Node(Node::EnumValueDefinition(value)),
        Printable::ExecutableDefinition(def) =>
            Lowered::Node(Node::ExecutableDefinition(def)),
        Printable::ExecutableDocument(doc) =>
            Lowered::Node(Node::ExecutableDocument(doc)),
        Printable::FieldDefinition(field) =>
            Lowered::Node(Node::FieldDefinition(field)),
        Printable::FragmentDefinition(def) =>
            Lowered::Node(Node::FragmentDefinition(def)),
        Printable::InputValueDefinition(value) =>
            Lowered::Node(Node::InputValueDefinition(value)),
        Printable::OperationDefinition(def) =>
            Lowered::Node(Node::OperationDefinition(def)),
        Printable::SchemaDefinition(def) =>
            Lowered::Node(Node::SchemaDefinition(def)),
        Printable::SchemaDocument(doc) =>
            Lowered::Node(Node::SchemaDocument(doc)),
        Printable::SchemaDocumentDefinition(def) =>
            Lowered::Node(Node::SchemaDocumentDefinition(def)),
        Printable::Selection(selection) =>
            Lowered::Node(Node::Selection(selection)),
        Printable::SelectionSet(selection_set) =>
            Lowered::Node(Node::SelectionSet(selection_set)),
        Printable::TypeDefinition(def) =>
            Lowered::Node(Node::TypeDefinition(def)),
        Printable::TypeExtension(ext) =>
            Lowered::Node(Node::TypeExtension(ext)),
        Printable::TypeReference(type_) =>
            Lowered::Node(Node::TypeReference(type_)),
        Printable::Value(value) =>
            Lowered::Node(Node::Value(value, None)),
        Printable::VariableDefinition(def) =>
            Lowered::Node(Node::VariableDefinition(def)),

        Printable::Directive(directive) =>
            Lowered::Owned(OwnedNode::DirectiveDefinition(directive_definition(directive))),
        Printable::EnumValue(value) =>
            Lowered::Owned(OwnedNode::EnumValueDefinition(enum_value(value))),
        Printable::Field(field) =>
            Lowered::Owned(OwnedNode::FieldDefinition(field_definition(field))),
        Printable::GraphQLType(type_) =>
            Lowered::Owned(OwnedNode::TypeDefinition(type_definition(type_))),
        Printable::InputField(field) =>
            Lowered::Owned(OwnedNode::InputValueDefinition(input_field(field))),
        Printable::Parameter(param) =>
            Lowered::Owned(OwnedNode::InputValueDefinition(parameter(param))),
        Printable::Schema(schema) =>
            Lowered::Schema(schema),
    }
}

/// Every definition of `schema` in print order: the `schema` definition
/// (when one is needed), then directive definitions, then types.
pub(crate) fn schema_definitions(
    schema: &Schema,
    settings: &Settings,
) -> Vec<LoweredDefinition> {
    let mut definitions = vec![];

    if let Some(def) = schema_definition(schema, settings) {
        definitions.push(LoweredDefinition {
            definition: ast::schema::Definition::SchemaDefinition(def),
            name: DefinitionName::Schema,
        });
    }

    if settings.print_directive_definitions() {
        definitions.extend(schema.all_directives().values().map(|directive| {
            LoweredDefinition {
                definition: ast::schema::Definition::DirectiveDefinition(
                    directive_definition(directive),
                ),
                name: DefinitionName::Directive(directive.name().to_string()),
            }
        }));
    }

    definitions.extend(schema.all_types().values().map(|type_| {
        LoweredDefinition {
            definition: ast::schema::Definition::TypeDefinition(type_definition(type_)),
            name: DefinitionName::Type(type_.name().to_string()),
        }
    }));

    definitions
}

/// The name a standalone node declares, if it declares one.
pub(crate) fn declared_name(node: Node<'_>) -> Option<DefinitionName> {
    match node {
        Node::DirectiveDefinition(def) =>
            Some(DefinitionName::Directive(def.name.to_string())),
        Node::TypeDefinition(def) =>
            Some(DefinitionName::Type(type_definition_name(def).to_string())),
        _ => None,
    }
}

fn type_definition_name(def: &ast::schema::TypeDefinition) -> &str {
    match def {
        ast::schema::TypeDefinition::Enum(def) => &def.name,
        ast::schema::TypeDefinition::InputObject(def) => &def.name,
        ast::schema::TypeDefinition::Interface(def) => &def.name,
        ast::schema::TypeDefinition::Object(def) => &def.name,
        ast::schema::TypeDefinition::Scalar(def) => &def.name,
        ast::schema::TypeDefinition::Union(def) => &def.name,
    }
}

/// `schema { ... }` is only needed when a root operation type has a
/// non-default name or the schema itself carries printable directives.
fn schema_definition(
    schema: &Schema,
    settings: &Settings,
) -> Option<ast::schema::SchemaDefinition> {
    let root_type = |kind: OperationKind| {
        schema.operation_type_name(kind).map(str::to_string)
    };
    let has_custom_root = [
        OperationKind::Mutation,
        OperationKind::Query,
        OperationKind::Subscription,
    ].into_iter().any(|kind| {
        schema.operation_type_name(kind)
            .is_some_and(|name| name != kind.default_type_name())
    });
    let has_directives = settings.print_directives() && !schema.directives().is_empty();

    if !has_custom_root && !has_directives {
        return None;
    }

    Some(ast::schema::SchemaDefinition {
        position: synthetic_pos(),
        directives: schema.directives().to_vec(),
        query: root_type(OperationKind::Query),
        mutation: root_type(OperationKind::Mutation),
        subscription: root_type(OperationKind::Subscription),
    })
}

/// Merges a legacy deprecation reason into `directives`: an existing
/// `@deprecated` is replaced in place, otherwise one is prepended. The
/// default reason is left implicit.
pub(crate) fn deprecated_directives(
    directives: &[ast::operation::Directive],
    deprecation_reason: Option<&str>,
) -> Vec<ast::operation::Directive> {
    let mut directives = directives.to_vec();
    let Some(reason) = deprecation_reason else {
        return directives;
    };

    let arguments = if reason.is_empty() || reason == DEFAULT_DEPRECATION_REASON {
        vec![]
    } else {
        vec![(
            "reason".to_string(),
            ast::operation::Value::String(reason.to_string()),
        )]
    };
    let deprecated = ast::operation::Directive {
        position: synthetic_pos(),
        name: "deprecated".to_string(),
        arguments,
    };

    match directives.iter().position(|directive| directive.name == "deprecated") {
        Some(index) => directives[index] = deprecated,
        None => directives.insert(0, deprecated),
    }
    directives
}

pub(crate) fn directive_definition(
    directive: &types::Directive,
) -> ast::schema::DirectiveDefinition {
    ast::schema::DirectiveDefinition {
        position: synthetic_pos(),
        description: directive.description().map(str::to_string),
        name: directive.name().to_string(),
        arguments: directive.parameters().values().map(parameter).collect(),
        repeatable: directive.repeatable(),
        locations: directive.locations(),
    }
}

pub(crate) fn enum_value(value: &types::EnumValue) -> ast::schema::EnumValue {
    ast::schema::EnumValue {
        position: synthetic_pos(),
        description: value.description().map(str::to_string),
        name: value.name().to_string(),
        directives: deprecated_directives(value.directives(), value.deprecation_reason()),
    }
}

pub(crate) fn field_definition(field: &types::Field) -> ast::schema::Field {
    ast::schema::Field {
        position: synthetic_pos(),
        description: field.description().map(str::to_string),
        name: field.name().to_string(),
        arguments: field.parameters().values().map(parameter).collect(),
        field_type: field.type_annotation().to_ast_type(),
        directives: deprecated_directives(field.directives(), field.deprecation_reason()),
    }
}

pub(crate) fn input_field(field: &types::InputField) -> ast::schema::InputValue {
    ast::schema::InputValue {
        position: synthetic_pos(),
        description: field.description().map(str::to_string),
        name: field.name().to_string(),
        value_type: field.type_annotation().to_ast_type(),
        default_value: field.default_value().cloned(),
        directives: deprecated_directives(field.directives(), field.deprecation_reason()),
    }
}

pub(crate) fn parameter(param: &types::Parameter) -> ast::schema::InputValue {
    ast::schema::InputValue {
        position: synthetic_pos(),
        description: param.description().map(str::to_string),
        name: param.name().to_string(),
        value_type: param.type_annotation().to_ast_type(),
        default_value: param.default_value().cloned(),
        directives: deprecated_directives(param.directives(), param.deprecation_reason()),
    }
}

pub(crate) fn type_definition(type_: &GraphQLType) -> ast::schema::TypeDefinition {
    let position = synthetic_pos();
    let description = type_.description().map(str::to_string);
    let directives = type_.directives().to_vec();
    let name = type_.name().to_string();

    match type_ {
        GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String =>
            ast::schema::TypeDefinition::Scalar(ast::schema::ScalarType {
                position,
                description,
                name,
                directives,
            }),

        GraphQLType::Enum(enum_type) =>
            ast::schema::TypeDefinition::Enum(ast::schema::EnumType {
                position,
                description,
                name,
                directives,
                values: enum_type.values().values().map(enum_value).collect(),
            }),

        GraphQLType::InputObject(input_type) =>
            ast::schema::TypeDefinition::InputObject(ast::schema::InputObjectType {
                position,
                description,
                name,
                directives,
                fields: input_type.fields().values().map(input_field).collect(),
            }),

        GraphQLType::Interface(iface) => {
            let (implements_interfaces, fields) = interfaces_and_fields(iface);
            ast::schema::TypeDefinition::Interface(ast::schema::InterfaceType {
                position,
                description,
                name,
                implements_interfaces,
                directives,
                fields,
            })
        },

        GraphQLType::Object(obj) => {
            let (implements_interfaces, fields) = interfaces_and_fields(obj);
            ast::schema::TypeDefinition::Object(ast::schema::ObjectType {
                position,
                description,
                name,
                implements_interfaces,
                directives,
                fields,
            })
        },

        GraphQLType::Union(union_type) =>
            ast::schema::TypeDefinition::Union(ast::schema::UnionType {
                position,
                description,
                name,
                directives,
                types: owned_names(union_type.member_type_names()),
            }),
    }
}

fn interfaces_and_fields(
    type_: &impl ObjectOrInterfaceTypeTrait,
) -> (Vec<String>, Vec<ast::schema::Field>) {
    (
        owned_names(type_.interface_names()),
        type_.fields().values().map(field_definition).collect(),
    )
}

fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
