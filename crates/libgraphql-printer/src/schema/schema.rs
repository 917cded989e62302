use crate::ast;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Directive",
    "__DirectiveLocation",
    "__EnumValue",
    "__Field",
    "__InputValue",
    "__Schema",
    "__Type",
    "__TypeKind",
];

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

/// Represents an immutable GraphQL schema.
///
/// Types and directives are kept in the order they were loaded, with the
/// built-in scalars first and the built-in directives last.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) directives: Vec<ast::operation::Directive>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`].
    ///
    /// This map includes both types defined while building this [`Schema`]
    /// as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Directive annotations applied to the `schema` definition itself.
    pub fn directives(&self) -> &[ast::operation::Directive] {
        &self.directives
    }

    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Whether `name` is one of the directives every schema provides.
    pub fn is_builtin_directive(name: &str) -> bool {
        BUILTIN_DIRECTIVE_NAMES.contains(&name)
    }

    /// Whether `name` is a built-in scalar or an introspection type.
    pub fn is_builtin_type(name: &str) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&name)
            || INTROSPECTION_TYPE_NAMES.contains(&name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema {}` definition may name a different type instead; this
    /// accounts for that override.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.operation_type(OperationKind::Mutation)
    }

    pub fn operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        self.operation_type_name(kind)
            .and_then(|name| self.types.get(name))
    }

    pub fn operation_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation =>
                self.mutation_type.as_ref().map(|type_ref| type_ref.name()),
            OperationKind::Query =>
                Some(self.query_type.name()),
            OperationKind::Subscription =>
                self.subscription_type.as_ref().map(|type_ref| type_ref.name()),
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.operation_type(OperationKind::Query)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.operation_type(OperationKind::Subscription)
    }
}
