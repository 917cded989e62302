use crate::blocks::Block;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// Verbatim text that takes part in sorting, e.g. a directive location.
pub(crate) struct NameBlock<'a> {
    name: Cow<'a, str>,
}
impl<'a> NameBlock<'a> {
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self { name: name.into() }
    }
}
impl Block for NameBlock<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_ref())
    }

    fn serialize(
        &self,
        _ctx: &Context<'_>,
        _collector: &mut Collector,
        _level: usize,
        _used: usize,
    ) -> Result<String> {
        Ok(self.name.to_string())
    }
}
