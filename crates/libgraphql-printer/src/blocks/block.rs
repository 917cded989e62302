use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

pub(crate) type BoxedBlock<'a> = Box<dyn Block + 'a>;

/// One renderable construct.
///
/// `level` is the indentation level of the line the block starts on and
/// `used` is the number of columns already taken on that line. The returned
/// text never includes the indentation of its own first line; that is
/// written by whoever places the block.
///
/// An empty string means the construct was suppressed (usually by a
/// filter). A block that renders empty registers nothing in the collector.
pub(crate) trait Block {
    /// Key that lists sort by when normalization is on.
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String>;
}

/// Width of `text` in columns.
pub(crate) fn text_length(text: &str) -> usize {
    text.chars().count()
}

/// Column reached after writing `text` starting at column `used`.
pub(crate) fn column_after(ctx: &Context<'_>, used: usize, text: &str) -> usize {
    let eol = ctx.eol();
    if eol.is_empty() {
        return used + text_length(text);
    }
    match text.rfind(eol) {
        Some(index) => text_length(&text[index + eol.len()..]),
        None => used + text_length(text),
    }
}
