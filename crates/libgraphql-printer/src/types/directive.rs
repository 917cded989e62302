use crate::ast;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::DEFAULT_DEPRECATION_REASON;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        description: Option<String>,
        locations: Vec<ast::schema::DirectiveLocation>,
        name: String,
        params: IndexMap<String, Parameter>,
        repeatable: bool,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn description(&self) -> Option<&str> {
        match self {
            Directive::Custom { description, .. } => description.as_deref(),
            Directive::Deprecated => Some(
                "Marks an element of a GraphQL schema as no longer supported.",
            ),
            Directive::Include => Some(
                "Directs the executor to include this field or fragment only \
                when the `if` argument is true.",
            ),
            Directive::Skip => Some(
                "Directs the executor to skip this field or fragment when the \
                `if` argument is true.",
            ),
            Directive::SpecifiedBy => Some(
                "Exposes a URL that specifies the behavior of this scalar.",
            ),
        }
    }

    pub(crate) fn from_ast(def: &ast::schema::DirectiveDefinition) -> Self {
        Directive::Custom {
            description: def.description.to_owned(),
            locations: def.locations.clone(),
            name: def.name.to_string(),
            params: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(input_val),
            )).collect(),
            repeatable: def.repeatable,
        }
    }

    /// Indicates whether this is one of the directives every GraphQL schema
    /// provides implicitly.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Directive::Custom { .. })
    }

    pub fn locations(&self) -> Vec<ast::schema::DirectiveLocation> {
        use ast::schema::DirectiveLocation;
        match self {
            Directive::Custom { locations, .. } => locations.clone(),
            Directive::Deprecated => vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            Directive::Include | Directive::Skip => vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            Directive::SpecifiedBy => vec![
                DirectiveLocation::Scalar,
            ],
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Directive::Custom { name, .. } => name.as_str(),
            Directive::Deprecated => "deprecated",
            Directive::Include => "include",
            Directive::Skip => "skip",
            Directive::SpecifiedBy => "specifiedBy",
        }
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        match self {
            Directive::Custom { params, .. } => params,
            Directive::Deprecated => builtin_params(&DEPRECATED_PARAMS, || {
                builtin_param(
                    "reason",
                    ast::operation::Type::NamedType("String".to_string()),
                    Some(ast::operation::Value::String(
                        DEFAULT_DEPRECATION_REASON.to_string(),
                    )),
                )
            }),
            Directive::Include => builtin_params(&INCLUDE_PARAMS, || {
                builtin_param("if", non_null_named("Boolean"), None)
            }),
            Directive::Skip => builtin_params(&SKIP_PARAMS, || {
                builtin_param("if", non_null_named("Boolean"), None)
            }),
            Directive::SpecifiedBy => builtin_params(&SPECIFIED_BY_PARAMS, || {
                builtin_param("url", non_null_named("String"), None)
            }),
        }
    }

    pub fn repeatable(&self) -> bool {
        match self {
            Directive::Custom { repeatable, .. } => *repeatable,
            _ => false,
        }
    }
}

type BuiltinParams = OnceLock<IndexMap<String, Parameter>>;

static DEPRECATED_PARAMS: BuiltinParams = OnceLock::new();
static INCLUDE_PARAMS: BuiltinParams = OnceLock::new();
static SKIP_PARAMS: BuiltinParams = OnceLock::new();
static SPECIFIED_BY_PARAMS: BuiltinParams = OnceLock::new();

fn builtin_params(
    cell: &'static BuiltinParams,
    init: impl FnOnce() -> Parameter,
) -> &'static IndexMap<String, Parameter> {
    cell.get_or_init(|| {
        let param = init();
        IndexMap::from([(param.name.to_string(), param)])
    })
}

fn builtin_param(
    name: &str,
    ast_type: ast::operation::Type,
    default_value: Option<ast::operation::Value>,
) -> Parameter {
    Parameter {
        default_value,
        deprecation_reason: None,
        description: None,
        directives: vec![],
        name: name.to_string(),
        type_annotation: TypeAnnotation::from_ast_type(&ast_type),
    }
}

fn non_null_named(name: &str) -> ast::operation::Type {
    ast::operation::Type::NonNullType(Box::new(
        ast::operation::Type::NamedType(name.to_string()),
    ))
}
