use crate::blocks::Block;
use crate::blocks::string_block::block_string;
use crate::blocks::string_block::is_block_string_safe;
use crate::blocks::string_block::quoted_string;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::borrow::Cow;

/// The `"""` doc comment placed above a definition. Renders empty for an
/// empty description, and as a quoted string when the text would not read
/// back unchanged from a block string.
pub(crate) struct DescriptionBlock<'a> {
    text: &'a str,
}
impl<'a> DescriptionBlock<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}
impl Block for DescriptionBlock<'_> {
    fn serialize(
        &self,
        ctx: &Context<'_>,
        _collector: &mut Collector,
        level: usize,
        _used: usize,
    ) -> Result<String> {
        let text = if ctx.settings().normalize_description() {
            Cow::Owned(normalize_description(self.text))
        } else {
            Cow::Borrowed(self.text)
        };

        if text.is_empty() {
            return Ok(String::new());
        }

        if is_block_string_safe(&text) {
            Ok(block_string(ctx, &text, level))
        } else {
            Ok(quoted_string(&text))
        }
    }
}

/// Unifies line endings, drops leading and trailing blank lines, strips
/// trailing whitespace from every line and collapses runs of blank lines
/// into one. Indentation shared by every non-blank line is removed.
pub(crate) fn normalize_description(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<&str> = vec![];
    for line in text.trim_matches('\n').lines().map(str::trim_end) {
        let previous_blank = lines.last().is_some_and(|last| last.is_empty());
        if line.is_empty() && previous_blank {
            continue;
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    while lines.first().is_some_and(|first| first.is_empty()) {
        lines.remove(0);
    }

    let common_indent = lines.iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines.iter()
        .map(|line| line.get(common_indent..).unwrap_or(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
