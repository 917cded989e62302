use crate::ast;
use crate::blocks::Block;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// A possibly wrapped type reference such as `[String!]!`.
///
/// Renders empty when the innermost named type is not allowed, which in
/// turn suppresses whatever declared that type.
pub(crate) struct TypeReferenceBlock<'a> {
    type_: &'a ast::operation::Type,
}
impl<'a> TypeReferenceBlock<'a> {
    pub fn new(type_: &'a ast::operation::Type) -> Self {
        Self { type_ }
    }
}
impl Block for TypeReferenceBlock<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(innermost_name(self.type_))
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        _level: usize,
        _used: usize,
    ) -> Result<String> {
        let name = innermost_name(self.type_);
        if !ctx.is_type_allowed(name) {
            return Ok(String::new());
        }

        collector.add_type(name);
        Ok(render(self.type_))
    }
}

/// A bare type name: an implemented interface, a union member, a type
/// condition or a root operation type.
pub(crate) struct NamedTypeBlock<'a> {
    name: &'a str,
}
impl<'a> NamedTypeBlock<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}
impl Block for NamedTypeBlock<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        _level: usize,
        _used: usize,
    ) -> Result<String> {
        if !ctx.is_type_allowed(self.name) {
            return Ok(String::new());
        }

        collector.add_type(self.name);
        Ok(self.name.to_string())
    }
}

pub(crate) fn innermost_name(type_: &ast::operation::Type) -> &str {
    match type_ {
        ast::operation::Type::ListType(inner)
            | ast::operation::Type::NonNullType(inner) => innermost_name(inner),
        ast::operation::Type::NamedType(name) => name.as_str(),
    }
}

fn render(type_: &ast::operation::Type) -> String {
    match type_ {
        ast::operation::Type::ListType(inner) => format!("[{}]", render(inner)),
        ast::operation::Type::NamedType(name) => name.to_string(),
        ast::operation::Type::NonNullType(inner) => format!("{}!", render(inner)),
    }
}
