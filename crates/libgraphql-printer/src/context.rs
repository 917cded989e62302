use crate::directive_resolver::DirectiveResolver;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::print_error::PrintError;
use crate::print_error::Result;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::settings::NameFilter;
use crate::settings::Settings;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::OnceLock;

static TYPENAME_TYPE: OnceLock<TypeAnnotation> = OnceLock::new();

fn typename_type() -> &'static TypeAnnotation {
    TYPENAME_TYPE.get_or_init(|| {
        TypeAnnotation::from_ast_type(&crate::ast::operation::Type::NonNullType(
            Box::new(crate::ast::operation::Type::NamedType("String".to_string())),
        ))
    })
}

/// Everything a block needs to know about the print call it belongs to:
/// the [`Settings`], and the optional [`Schema`] and [`DirectiveResolver`]
/// used to type and filter what it renders.
///
/// Filter decisions are memoized per name for the lifetime of the context.
/// Lookups against a missing schema yield `Ok(None)`; lookups that a present
/// schema cannot answer are errors.
pub(crate) struct Context<'a> {
    allowed_directive_definitions: RefCell<HashMap<String, bool>>,
    allowed_directives: RefCell<HashMap<String, bool>>,
    allowed_type_definitions: RefCell<HashMap<String, bool>>,
    allowed_types: RefCell<HashMap<String, bool>>,
    directive_resolver: Option<&'a dyn DirectiveResolver>,
    schema: Option<&'a Schema>,
    settings: &'a Settings,
}
impl<'a> Context<'a> {
    pub fn new(
        settings: &'a Settings,
        directive_resolver: Option<&'a dyn DirectiveResolver>,
        schema: Option<&'a Schema>,
    ) -> Self {
        Self {
            allowed_directive_definitions: RefCell::new(HashMap::new()),
            allowed_directives: RefCell::new(HashMap::new()),
            allowed_type_definitions: RefCell::new(HashMap::new()),
            allowed_types: RefCell::new(HashMap::new()),
            directive_resolver,
            schema,
            settings,
        }
    }

    pub fn schema(&self) -> Option<&'a Schema> {
        self.schema
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    // Whitespace

    pub fn eol(&self) -> &'a str {
        self.settings.line_end()
    }

    pub fn indent(&self, level: usize) -> String {
        self.settings.indent().repeat(level)
    }

    pub fn is_multiline(&self, text: &str) -> bool {
        let eol = self.eol();
        if eol.is_empty() {
            return memchr::memchr(b'\n', text.as_bytes()).is_some();
        }
        memchr::memmem::find(text.as_bytes(), eol.as_bytes()).is_some()
    }

    pub fn space(&self) -> &'a str {
        self.settings.space()
    }

    // Filters

    pub fn is_directive_allowed(&self, name: &str) -> bool {
        cached(&self.allowed_directives, name, || {
            let is_builtin = Schema::is_builtin_directive(name);
            let allowed = self.settings.directive_filter()
                .is_none_or(|filter| filter.allows(name, is_builtin));
            log::trace!("Directive `@{name}` allowed: {allowed}");
            allowed
        })
    }

    pub fn is_directive_definition_allowed(&self, name: &str) -> bool {
        cached(&self.allowed_directive_definitions, name, || {
            let allowed = self.is_directive_allowed(name) && is_definition_allowed(
                self.settings.directive_definition_filter(),
                name,
                Schema::is_builtin_directive(name),
            );
            log::trace!("Directive definition `@{name}` allowed: {allowed}");
            allowed
        })
    }

    /// Whether `name` may be referenced, e.g. as the type of a field. Every
    /// name is allowed when no schema is attached.
    pub fn is_type_allowed(&self, name: &str) -> bool {
        if self.schema.is_none() {
            return true;
        }

        cached(&self.allowed_types, name, || {
            let is_builtin = Schema::is_builtin_type(name);
            let allowed = self.settings.type_filter()
                .is_none_or(|filter| filter.allows(name, is_builtin));
            log::trace!("Type `{name}` allowed: {allowed}");
            allowed
        })
    }

    pub fn is_type_definition_allowed(&self, name: &str) -> bool {
        cached(&self.allowed_type_definitions, name, || {
            let allowed = self.is_type_allowed(name) && is_definition_allowed(
                self.settings.type_definition_filter(),
                name,
                Schema::is_builtin_type(name),
            );
            log::trace!("Type definition `{name}` allowed: {allowed}");
            allowed
        })
    }

    // Lookups

    pub fn get_directive(&self, name: &str) -> Result<Option<&'a Directive>> {
        let directive = self.schema
            .and_then(|schema| schema.get_directive(name))
            .or_else(|| {
                self.directive_resolver.and_then(|resolver| resolver.directive(name))
            });

        match directive {
            None if self.schema.is_some() =>
                Err(PrintError::DirectiveDefinitionNotFound {
                    directive_name: name.to_string(),
                }),
            directive => Ok(directive),
        }
    }

    pub fn get_directive_argument_type(
        &self,
        directive_name: &str,
        argument_name: &str,
    ) -> Result<Option<&'a TypeAnnotation>> {
        let argument_type = self.get_directive(directive_name)?
            .and_then(|directive| directive.parameters().get(argument_name))
            .map(|param| param.type_annotation());

        match argument_type {
            None if self.schema.is_some() =>
                Err(PrintError::DirectiveArgumentNotFound {
                    directive_name: directive_name.to_string(),
                    argument_name: argument_name.to_string(),
                }),
            argument_type => Ok(argument_type),
        }
    }

    pub fn get_field_argument_type(
        &self,
        type_name: &str,
        field_name: &str,
        argument_name: &str,
    ) -> Result<Option<&'a TypeAnnotation>> {
        let Some(type_) = self.get_type(type_name)? else {
            return Ok(None);
        };

        let fields = match type_ {
            GraphQLType::Interface(iface) => iface.fields(),
            GraphQLType::Object(obj) => obj.fields(),
            _ => return Ok(None),
        };

        let Some(field) = fields.get(field_name) else {
            return Err(PrintError::FieldNotFound {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            });
        };

        field.parameters()
            .get(argument_name)
            .map(|param| Some(param.type_annotation()))
            .ok_or_else(|| PrintError::FieldArgumentNotFound {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
                argument_name: argument_name.to_string(),
            })
    }

    /// Declared type of `type_name.field_name`.
    ///
    /// Scalars, enums, and unions declare no fields, so `Ok(None)` is
    /// returned for them (object literals given to custom scalars are left
    /// untyped). `__typename` resolves on every type.
    pub fn get_field_type(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<Option<&'a TypeAnnotation>> {
        if field_name == "__typename" {
            return Ok(Some(typename_type()));
        }

        let Some(type_) = self.get_type(type_name)? else {
            return Ok(None);
        };

        let field_type = match type_ {
            GraphQLType::InputObject(input_obj) => input_obj.fields()
                .get(field_name)
                .map(|field| field.type_annotation()),
            GraphQLType::Interface(iface) => iface.fields()
                .get(field_name)
                .map(|field| field.type_annotation()),
            GraphQLType::Object(obj) => obj.fields()
                .get(field_name)
                .map(|field| field.type_annotation()),
            _ => return Ok(None),
        };

        match field_type {
            None => Err(PrintError::FieldNotFound {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            }),
            field_type => Ok(field_type),
        }
    }

    /// Name of the root type for `kind`. Fails when the attached schema
    /// doesn't define that root operation.
    pub fn get_operation_type_name(
        &self,
        kind: OperationKind,
    ) -> Result<Option<&'a str>> {
        let Some(schema) = self.schema else {
            return Ok(None);
        };

        schema.operation_type_name(kind)
            .map(Some)
            .ok_or_else(|| PrintError::TypeNotFound {
                type_name: kind.default_type_name().to_string(),
            })
    }

    pub fn get_type(&self, name: &str) -> Result<Option<&'a GraphQLType>> {
        let Some(schema) = self.schema else {
            return Ok(None);
        };

        GraphQLType::deref_name(schema, name)
            .map(Some)
            .map_err(|DerefByNameError::DanglingReference(type_name)| {
                PrintError::TypeNotFound { type_name }
            })
    }
}

fn cached(
    cache: &RefCell<HashMap<String, bool>>,
    name: &str,
    decide: impl FnOnce() -> bool,
) -> bool {
    if let Some(allowed) = cache.borrow().get(name) {
        return *allowed;
    }

    let allowed = decide();
    cache.borrow_mut().insert(name.to_string(), allowed);
    allowed
}

/// Built-in names need a definition filter that explicitly allows them;
/// everything else is shown unless a definition filter denies it.
fn is_definition_allowed(
    filter: Option<&NameFilter>,
    name: &str,
    is_builtin: bool,
) -> bool {
    match filter {
        Some(filter) => filter.allows(name, is_builtin),
        None => !is_builtin,
    }
}
