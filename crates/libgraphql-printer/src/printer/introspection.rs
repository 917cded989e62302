use crate::ast;
use crate::print_error::PrintError;
use crate::print_error::Result;
use crate::schema::Schema;
use crate::settings::NameFilter;
use crate::settings::Settings;
use std::sync::OnceLock;

/// The introspection types and the directives every schema provides.
const INTROSPECTION_SOURCE: &str = r#"
directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE

directive @specifiedBy(url: String!) on SCALAR

type __Schema {
  description: String
  types: [__Type!]!
  queryType: __Type!
  mutationType: __Type
  subscriptionType: __Type
  directives: [__Directive!]!
}

type __Type {
  kind: __TypeKind!
  name: String
  description: String
  specifiedByURL: String
  fields(includeDeprecated: Boolean = false): [__Field!]
  interfaces: [__Type!]
  possibleTypes: [__Type!]
  enumValues(includeDeprecated: Boolean = false): [__EnumValue!]
  inputFields(includeDeprecated: Boolean = false): [__InputValue!]
  ofType: __Type
}

enum __TypeKind {
  SCALAR
  OBJECT
  INTERFACE
  UNION
  ENUM
  INPUT_OBJECT
  LIST
  NON_NULL
}

type __Field {
  name: String!
  description: String
  args(includeDeprecated: Boolean = false): [__InputValue!]!
  type: __Type!
  isDeprecated: Boolean!
  deprecationReason: String
}

type __InputValue {
  name: String!
  description: String
  type: __Type!
  defaultValue: String
  isDeprecated: Boolean!
  deprecationReason: String
}

type __EnumValue {
  name: String!
  description: String
  isDeprecated: Boolean!
  deprecationReason: String
}

type __Directive {
  name: String!
  description: String
  isRepeatable: Boolean!
  locations: [__DirectiveLocation!]!
  args(includeDeprecated: Boolean = false): [__InputValue!]!
}

enum __DirectiveLocation {
  QUERY
  MUTATION
  SUBSCRIPTION
  FIELD
  FRAGMENT_DEFINITION
  FRAGMENT_SPREAD
  INLINE_FRAGMENT
  VARIABLE_DEFINITION
  SCHEMA
  SCALAR
  OBJECT
  FIELD_DEFINITION
  ARGUMENT_DEFINITION
  INTERFACE
  UNION
  ENUM
  ENUM_VALUE
  INPUT_OBJECT
  INPUT_FIELD_DEFINITION
}
"#;

static INTROSPECTION_DOCUMENT: OnceLock<Result<ast::schema::Document>> = OnceLock::new();

/// The introspection definitions as a schema document, parsed once.
pub(crate) fn document() -> Result<&'static ast::schema::Document> {
    INTROSPECTION_DOCUMENT
        .get_or_init(|| {
            ast::schema::parse(INTROSPECTION_SOURCE).map_err(|err| {
                PrintError::IntrospectionSchemaInvalid {
                    message: err.to_string(),
                }
            })
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// `settings` with the definition filters replaced so that exactly the
/// introspection types and the built-in directives are definition-allowed.
pub(crate) fn settings(settings: &Settings) -> Settings {
    settings.clone()
        .with_type_definition_filter(NameFilter::new(|name, is_builtin| {
            is_builtin && name.starts_with("__")
        }))
        .with_directive_definition_filter(NameFilter::new(|name, _| {
            Schema::is_builtin_directive(name)
        }))
}
