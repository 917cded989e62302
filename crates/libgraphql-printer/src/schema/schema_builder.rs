use crate::ast;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::TypesMapBuilder;
use crate::types;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [Schema] from one or more SDL sources.
///
/// Type extensions are collected while loading and merged into their base
/// definitions by [`SchemaBuilder::build()`], so an extension may be loaded
/// before the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<String>,
    pending_extensions: Vec<ast::schema::TypeExtension>,
    query_type: Option<String>,
    schema_directives: Vec<ast::operation::Directive>,
    str_load_counter: u16,
    subscription_type: Option<String>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        for ext in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(ext)?;
        }

        let query_type = self.resolve_operation_type(OperationKind::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_operation_type(OperationKind::Mutation)?;
        let subscription_type =
            self.resolve_operation_type(OperationKind::Subscription)?;

        Ok(Schema {
            directive_defs: self.directive_defs,
            directives: self.schema_directives,
            mutation_type: mutation_type.map(NamedGraphQLTypeRef::new),
            query_type: NamedGraphQLTypeRef::new(query_type),
            subscription_type: subscription_type.map(NamedGraphQLTypeRef::new),
            types: self.types_map_builder.into_types_map(),
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            schema_directives: vec![],
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    err,
                })?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        log::debug!(
            "Loading {} definitions from {file_path:?}.",
            ast_doc.definitions.len(),
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(def)?;
        }

        Ok(self)
    }

    fn apply_type_extension(
        &mut self,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let type_name = match &ext {
            TypeExtension::Enum(ext) => ext.name.to_string(),
            TypeExtension::InputObject(ext) => ext.name.to_string(),
            TypeExtension::Interface(ext) => ext.name.to_string(),
            TypeExtension::Object(ext) => ext.name.to_string(),
            TypeExtension::Scalar(ext) => ext.name.to_string(),
            TypeExtension::Union(ext) => ext.name.to_string(),
        };

        let Some(type_) = self.types_map_builder.get_type_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.directives.extend(ext.directives);
                for value in &ext.values {
                    insert_unique(
                        &mut enum_type.values,
                        enum_value_from_ast(&type_name, value),
                        |value| value.name.to_string(),
                        |value_name| SchemaBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name.to_string(),
                            value_name,
                        },
                    )?;
                }
            },

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                inputobj_type.directives.extend(ext.directives);
                for field in &ext.fields {
                    insert_unique(
                        &mut inputobj_type.fields,
                        input_field_from_ast(field),
                        |field| field.name.to_string(),
                        |field_name| SchemaBuildError::DuplicateFieldNameDefinition {
                            type_name: type_name.to_string(),
                            field_name,
                        },
                    )?;
                }
            },

            (GraphQLType::Interface(InterfaceType(data)), TypeExtension::Interface(ext)) =>
                extend_object_or_interface_data(
                    data,
                    ext.implements_interfaces,
                    ext.directives,
                    &ext.fields,
                )?,

            (GraphQLType::Object(ObjectType(data)), TypeExtension::Object(ext)) =>
                extend_object_or_interface_data(
                    data,
                    ext.implements_interfaces,
                    ext.directives,
                    &ext.fields,
                )?,

            (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) =>
                scalar_type.directives.extend(ext.directives),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.directives.extend(ext.directives);
                for member in ext.types {
                    if union_type.members.contains_key(member.as_str()) {
                        return Err(SchemaBuildError::DuplicatedUnionMember {
                            type_name,
                            member_name: member,
                        });
                    }
                    union_type.members.insert(
                        member.to_string(),
                        NamedGraphQLTypeRef::new(member),
                    );
                }
            },

            (_, ext) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                extension_keyword: extension_keyword(&ext),
            }),
        }

        Ok(())
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in [
            Directive::Deprecated,
            Directive::Include,
            Directive::Skip,
            Directive::SpecifiedBy,
        ] {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(
                    directive.name().to_string(),
                    directive,
                );
            }
        }
    }

    fn resolve_operation_type(
        &self,
        operation: OperationKind,
    ) -> Result<Option<String>> {
        let explicit = match operation {
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Query => &self.query_type,
            OperationKind::Subscription => &self.subscription_type,
        };

        match explicit {
            Some(type_name) if self.types_map_builder.contains_type(type_name) =>
                Ok(Some(type_name.to_string())),

            Some(type_name) => Err(SchemaBuildError::UndefinedOperationType {
                operation,
                type_name: type_name.to_string(),
            }),

            None => {
                let default_name = operation.default_type_name();
                Ok(self.types_map_builder
                    .contains_type(default_name)
                    .then(|| default_name.to_string()))
            },
        }
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(schema_def),
            Definition::TypeDefinition(type_def) =>
                self.types_map_builder.add_new_type(type_from_ast(type_def)),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push(type_ext);
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        if Schema::is_builtin_directive(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
            });
        }

        if self.directive_defs.contains_key(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
            });
        }

        self.directive_defs.insert(
            def.name.to_string(),
            Directive::from_ast(&def),
        );
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        for (operation, type_name) in [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if slot.is_some() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                });
            }
            *slot = Some(type_name);
        }

        self.schema_directives.extend(schema_def.directives);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_object_or_interface_data(
    data: &mut ObjectOrInterfaceTypeData,
    interfaces: Vec<String>,
    directives: Vec<ast::operation::Directive>,
    fields: &[ast::schema::Field],
) -> Result<()> {
    for iface_name in interfaces {
        if data.interface_names().contains(&iface_name.as_str()) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                type_name: data.name.to_string(),
                duplicated_interface_name: iface_name,
            });
        }
        data.interfaces.push(NamedGraphQLTypeRef::new(iface_name));
    }

    data.directives.extend(directives);

    let type_name = data.name.to_string();
    for field in fields {
        insert_unique(
            &mut data.fields,
            field_from_ast(field),
            |field| field.name.to_string(),
            |field_name| SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name,
            },
        )?;
    }

    Ok(())
}

fn extension_keyword(ext: &ast::schema::TypeExtension) -> &'static str {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(_) => "enum",
        TypeExtension::InputObject(_) => "input",
        TypeExtension::Interface(_) => "interface",
        TypeExtension::Object(_) => "type",
        TypeExtension::Scalar(_) => "scalar",
        TypeExtension::Union(_) => "union",
    }
}

fn insert_unique<T>(
    map: &mut IndexMap<String, T>,
    item: T,
    key: impl Fn(&T) -> String,
    duplicate_err: impl FnOnce(String) -> SchemaBuildError,
) -> Result<()> {
    let key = key(&item);
    if map.contains_key(key.as_str()) {
        return Err(duplicate_err(key));
    }
    map.insert(key, item);
    Ok(())
}

fn enum_value_from_ast(
    enum_name: &str,
    value: &ast::schema::EnumValue,
) -> EnumValue {
    EnumValue {
        deprecation_reason: types::deprecation_reason(&value.directives),
        description: value.description.to_owned(),
        directives: value.directives.clone(),
        name: value.name.to_string(),
        type_ref: NamedGraphQLTypeRef::new(enum_name),
    }
}

fn field_from_ast(field: &ast::schema::Field) -> Field {
    Field {
        deprecation_reason: types::deprecation_reason(&field.directives),
        description: field.description.to_owned(),
        directives: field.directives.clone(),
        name: field.name.to_string(),
        parameters: field.arguments.iter().map(|input_val| (
            input_val.name.to_string(),
            Parameter::from_ast(input_val),
        )).collect(),
        type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
    }
}

fn input_field_from_ast(input_val: &ast::schema::InputValue) -> InputField {
    InputField {
        default_value: input_val.default_value.clone(),
        deprecation_reason: types::deprecation_reason(&input_val.directives),
        description: input_val.description.to_owned(),
        directives: input_val.directives.clone(),
        name: input_val.name.to_string(),
        type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
    }
}

fn object_or_interface_data(
    name: String,
    description: Option<String>,
    interfaces: Vec<String>,
    directives: Vec<ast::operation::Directive>,
    fields: &[ast::schema::Field],
) -> ObjectOrInterfaceTypeData {
    ObjectOrInterfaceTypeData {
        description,
        directives,
        fields: fields.iter().map(|field| (
            field.name.to_string(),
            field_from_ast(field),
        )).collect(),
        interfaces: interfaces.into_iter()
            .map(NamedGraphQLTypeRef::new)
            .collect(),
        name,
    }
}

fn type_from_ast(type_def: ast::schema::TypeDefinition) -> GraphQLType {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
            values: def.values.iter().map(|value| (
                value.name.to_string(),
                enum_value_from_ast(def.name.as_str(), value),
            )).collect(),
            description: def.description,
            directives: def.directives,
            name: def.name,
        }),

        TypeDefinition::InputObject(def) => GraphQLType::InputObject(InputObjectType {
            fields: def.fields.iter().map(|field| (
                field.name.to_string(),
                input_field_from_ast(field),
            )).collect(),
            description: def.description,
            directives: def.directives,
            name: def.name,
        }),

        TypeDefinition::Interface(def) => GraphQLType::Interface(InterfaceType(
            object_or_interface_data(
                def.name,
                def.description,
                def.implements_interfaces,
                def.directives,
                &def.fields,
            ),
        )),

        TypeDefinition::Object(def) => GraphQLType::Object(ObjectType(
            object_or_interface_data(
                def.name,
                def.description,
                def.implements_interfaces,
                def.directives,
                &def.fields,
            ),
        )),

        TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType {
            description: def.description,
            directives: def.directives,
            name: def.name,
        }),

        TypeDefinition::Union(def) => GraphQLType::Union(UnionType {
            members: def.types.into_iter().map(|member| (
                member.to_string(),
                NamedGraphQLTypeRef::new(member),
            )).collect(),
            description: def.description,
            directives: def.directives,
            name: def.name,
        }),
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation:?} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("The `{type_name}` union specifies `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` using `extend {extension_keyword}`, \
        but `{type_name}` is a different kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_keyword: &'static str,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema string from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
    },

    #[error("Failure while trying to read the schema file at {file:?}")]
    SchemaFileReadError {
        file: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error(
        "The {operation:?} root operation is declared as `{type_name}`, but no \
        type with that name is defined"
    )]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
