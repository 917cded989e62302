use crate::ast;
use crate::blocks::BoxedBlock;
use crate::blocks::Definition;
use crate::blocks::DefinitionBlock;
use crate::blocks::ListBlock;
use crate::blocks::NamedTypeBlock;
use crate::blocks::definitions::EnumValueDefinition;
use crate::blocks::definitions::FieldDefinition;
use crate::blocks::definitions::InputValueDefinition;
use crate::blocks::directive_list;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

#[derive(Clone, Copy, Debug)]
enum TypeDefinitionKind<'a> {
    Enum(&'a [ast::schema::EnumValue]),
    InputObject(&'a [ast::schema::InputValue]),
    Interface {
        fields: &'a [ast::schema::Field],
        interfaces: &'a [String],
    },
    Object {
        fields: &'a [ast::schema::Field],
        interfaces: &'a [String],
    },
    Scalar,
    Union(&'a [String]),
}
impl TypeDefinitionKind<'_> {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input",
            Self::Interface { .. } => "interface",
            Self::Object { .. } => "type",
            Self::Scalar => "scalar",
            Self::Union(_) => "union",
        }
    }
}

/// A type definition or a type extension of any of the six kinds.
///
/// Extensions render as `extend <keyword>` and don't register their own
/// name: they reference a type rather than define one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TypeDefinition<'a> {
    description: Option<&'a str>,
    directives: &'a [ast::operation::Directive],
    extension: bool,
    kind: TypeDefinitionKind<'a>,
    name: &'a str,
}
impl<'a> TypeDefinition<'a> {
    pub fn from_definition(def: &'a ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition as Def;
        let (description, directives, kind, name) = match def {
            Def::Enum(def) => (
                &def.description,
                &def.directives,
                TypeDefinitionKind::Enum(&def.values),
                &def.name,
            ),
            Def::InputObject(def) => (
                &def.description,
                &def.directives,
                TypeDefinitionKind::InputObject(&def.fields),
                &def.name,
            ),
            Def::Interface(def) => (
                &def.description,
                &def.directives,
                TypeDefinitionKind::Interface {
                    fields: &def.fields,
                    interfaces: &def.implements_interfaces,
                },
                &def.name,
            ),
            Def::Object(def) => (
                &def.description,
                &def.directives,
                TypeDefinitionKind::Object {
                    fields: &def.fields,
                    interfaces: &def.implements_interfaces,
                },
                &def.name,
            ),
            Def::Scalar(def) => (
                &def.description,
                &def.directives,
                TypeDefinitionKind::Scalar,
                &def.name,
            ),
            Def::Union(def) => (
                &def.description,
                &def.directives,
                TypeDefinitionKind::Union(&def.types),
                &def.name,
            ),
        };

        Self {
            description: description.as_deref(),
            directives,
            extension: false,
            kind,
            name,
        }
    }

    pub fn from_extension(ext: &'a ast::schema::TypeExtension) -> Self {
        use ast::schema::TypeExtension as Ext;
        let (directives, kind, name) = match ext {
            Ext::Enum(ext) => (
                &ext.directives,
                TypeDefinitionKind::Enum(&ext.values),
                &ext.name,
            ),
            Ext::InputObject(ext) => (
                &ext.directives,
                TypeDefinitionKind::InputObject(&ext.fields),
                &ext.name,
            ),
            Ext::Interface(ext) => (
                &ext.directives,
                TypeDefinitionKind::Interface {
                    fields: &ext.fields,
                    interfaces: &ext.implements_interfaces,
                },
                &ext.name,
            ),
            Ext::Object(ext) => (
                &ext.directives,
                TypeDefinitionKind::Object {
                    fields: &ext.fields,
                    interfaces: &ext.implements_interfaces,
                },
                &ext.name,
            ),
            Ext::Scalar(ext) => (
                &ext.directives,
                TypeDefinitionKind::Scalar,
                &ext.name,
            ),
            Ext::Union(ext) => (
                &ext.directives,
                TypeDefinitionKind::Union(&ext.types),
                &ext.name,
            ),
        };

        Self {
            description: None,
            directives,
            extension: true,
            kind,
            name,
        }
    }
}
impl Definition for TypeDefinition<'_> {
    fn keyword(&self) -> Option<Cow<'_, str>> {
        let keyword = self.kind.keyword();
        Some(if self.extension {
            Cow::Owned(format!("extend {keyword}"))
        } else {
            Cow::Borrowed(keyword)
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }

    fn description(&self) -> Option<&str> {
        self.description
    }

    fn is_allowed(&self, ctx: &Context<'_>) -> Result<bool> {
        Ok(ctx.is_type_definition_allowed(self.name))
    }

    fn register(&self, _ctx: &Context<'_>, collector: &mut Collector) -> Result<()> {
        if !self.extension {
            collector.add_type(self.name);
        }
        Ok(())
    }

    fn body(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        let interfaces = match self.kind {
            TypeDefinitionKind::Interface { interfaces, .. }
                | TypeDefinitionKind::Object { interfaces, .. } => interfaces,
            _ => return Ok(None),
        };
        if interfaces.is_empty() {
            return Ok(None);
        }

        let settings = ctx.settings();
        Ok(Some(Box::new(
            ListBlock::sigil("implements", "&", named_types(interfaces))
                .always_multiline(settings.always_multiline_interfaces())
                .normalized(settings.normalize_interfaces()),
        )))
    }

    fn directives(&self, _ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        Ok(directive_list(self.directives))
    }

    fn fields(&self, ctx: &Context<'_>) -> Result<Option<BoxedBlock<'_>>> {
        let settings = ctx.settings();
        let (items, normalized): (Vec<BoxedBlock<'_>>, bool) = match self.kind {
            TypeDefinitionKind::Enum(values) => (
                values.iter()
                    .map(|value| DefinitionBlock::boxed(EnumValueDefinition::new(value)))
                    .collect(),
                settings.normalize_enums(),
            ),

            TypeDefinitionKind::InputObject(fields) => (
                fields.iter()
                    .map(|field| DefinitionBlock::boxed(InputValueDefinition::new(field)))
                    .collect(),
                settings.normalize_fields(),
            ),

            TypeDefinitionKind::Interface { fields, .. }
                | TypeDefinitionKind::Object { fields, .. } => (
                fields.iter()
                    .map(|field| DefinitionBlock::boxed(FieldDefinition::new(field)))
                    .collect(),
                settings.normalize_fields(),
            ),

            TypeDefinitionKind::Scalar => return Ok(None),

            TypeDefinitionKind::Union(members) => {
                if members.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(Box::new(
                    ListBlock::sigil("=", "|", named_types(members))
                        .always_multiline(settings.always_multiline_unions())
                        .normalized(settings.normalize_unions()),
                )));
            },
        };

        if items.is_empty() {
            return Ok(None);
        }

        Ok(Some(Box::new(
            ListBlock::wrapped("{", "}", items)
                .always_multiline(true)
                .blank_lines(true)
                .normalized(normalized),
        )))
    }
}

fn named_types(names: &[String]) -> Vec<BoxedBlock<'_>> {
    names.iter()
        .map(|name| Box::new(NamedTypeBlock::new(name)) as BoxedBlock<'_>)
        .collect()
}
