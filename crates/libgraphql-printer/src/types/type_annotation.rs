use crate::ast;
use crate::types::NamedGraphQLTypeRef;

/// The declared type of a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField) or
/// [`Parameter`](crate::types::Parameter), e.g. `[String!]!`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        item: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        nullable: bool,
        type_ref: NamedGraphQLTypeRef,
    },
}
impl TypeAnnotation {
    pub fn from_ast_type(ast_type: &ast::operation::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &ast::operation::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(item) => Self::List {
                item: Box::new(Self::from_ast_type_impl(item, true)),
                nullable,
            },

            ast::operation::Type::NamedType(name) => Self::Named {
                nullable,
                type_ref: NamedGraphQLTypeRef::new(name),
            },

            ast::operation::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Name of the inner-most named type, e.g. `String` for `[String!]!`.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { item, .. } => item.innermost_type_name(),
            Self::Named { type_ref, .. } => type_ref.name(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// The annotation one list-level down: the item type of a list
    /// annotation, or the annotation itself when it is already named.
    ///
    /// Values are typed with this when a list literal is rendered, and also
    /// when a single value is passed where a list is expected.
    pub fn item_type_annotation(&self) -> &TypeAnnotation {
        match self {
            Self::List { item, .. } => item,
            Self::Named { .. } => self,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    /// Rebuilds the syntax-tree form of this annotation.
    pub fn to_ast_type(&self) -> ast::operation::Type {
        let inner = match self {
            Self::List { item, .. } =>
                ast::operation::Type::ListType(Box::new(item.to_ast_type())),
            Self::Named { type_ref, .. } =>
                ast::operation::Type::NamedType(type_ref.name().to_string()),
        };

        if self.nullable() {
            inner
        } else {
            ast::operation::Type::NonNullType(Box::new(inner))
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { item, .. } => write!(f, "[{item}]")?,
            Self::Named { type_ref, .. } => f.write_str(type_ref.name())?,
        }

        if self.nullable() {
            Ok(())
        } else {
            f.write_str("!")
        }
    }
}
