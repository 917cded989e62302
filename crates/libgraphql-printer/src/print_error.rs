use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, PrintError>;

/// Failure to print a construct.
///
/// Lookup failures are only reported when a [`Schema`](crate::schema::Schema)
/// is attached; without one, unknown names are printed as-is.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PrintError {
    #[error("Nesting exceeds the configured maximum depth of {max_depth}")]
    DepthLimitExceeded {
        max_depth: usize,
    },

    #[error("The `@{directive_name}` directive does not declare an argument named `{argument_name}`")]
    DirectiveArgumentNotFound {
        directive_name: String,
        argument_name: String,
    },

    #[error("No definition found for the `@{directive_name}` directive")]
    DirectiveDefinitionNotFound {
        directive_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field does not declare an argument \
        named `{argument_name}`"
    )]
    FieldArgumentNotFound {
        type_name: String,
        field_name: String,
        argument_name: String,
    },

    #[error("The `{type_name}` type does not define a field named `{field_name}`")]
    FieldNotFound {
        type_name: String,
        field_name: String,
    },

    #[error("The built-in introspection schema failed to parse: {message}")]
    IntrospectionSchemaInvalid {
        message: String,
    },

    #[error("No type named `{type_name}` is defined in the schema")]
    TypeNotFound {
        type_name: String,
    },
}
