mod directive;
mod enum_type;
mod enum_value;
mod field;
mod graphql_type;
mod input_field;
mod input_object_type;
mod interface_type;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

use crate::ast;

pub use directive::Directive;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

/// Reason reported for `@deprecated` annotations that don't pass one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Reads the legacy "deprecation reason" out of a list of directive
/// annotations: `None` when no `@deprecated` is present, otherwise the
/// `reason` argument or [`DEFAULT_DEPRECATION_REASON`].
pub(crate) fn deprecation_reason(
    directives: &[ast::operation::Directive],
) -> Option<String> {
    let deprecated = directives.iter().find(|directive| {
        directive.name == "deprecated"
    })?;

    let reason = deprecated.arguments.iter().find_map(|(name, value)| {
        match (name.as_str(), value) {
            ("reason", ast::operation::Value::String(reason)) =>
                Some(reason.to_string()),
            _ => None,
        }
    });

    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}

#[cfg(test)]
mod tests;
