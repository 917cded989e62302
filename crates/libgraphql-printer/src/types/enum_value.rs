use crate::ast;
use crate::types::NamedGraphQLTypeRef;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::operation::Directive>,
    pub(crate) name: String,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl EnumValue {
    /// The reason given when this value was deprecated. An empty string is a
    /// deprecation without an explicit reason; `None` means not deprecated.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of directive annotations applied to this [`EnumValue`], in
    /// the order they were written.
    pub fn directives(&self) -> &[ast::operation::Directive] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) this value
    /// belongs to.
    pub fn enum_type_name(&self) -> &str {
        self.type_ref.name()
    }
}
