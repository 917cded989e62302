use crate::blocks::Block;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;
use std::fmt::Write;

/// A string literal. Values containing a line break become block strings
/// indented at the current level when they read back unchanged; everything
/// else is quoted and escaped.
pub(crate) struct StringBlock<'a> {
    value: &'a str,
}
impl<'a> StringBlock<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }
}
impl Block for StringBlock<'_> {
    fn serialize(
        &self,
        ctx: &Context<'_>,
        _collector: &mut Collector,
        level: usize,
        _used: usize,
    ) -> Result<String> {
        if self.value.contains('\n') && is_block_string_safe(self.value) {
            Ok(block_string(ctx, self.value, level))
        } else {
            Ok(quoted_string(self.value))
        }
    }
}

/// Renders `text` as a `"""` block string whose lines sit at `level`.
pub(crate) fn block_string(ctx: &Context<'_>, text: &str, level: usize) -> String {
    let eol = ctx.eol();
    let indent = ctx.indent(level);

    let mut out = String::from("\"\"\"");
    for line in text.lines() {
        out.push_str(eol);
        if !line.is_empty() {
            out.push_str(&indent);
            out.push_str(&line.replace("\"\"\"", "\\\"\"\""));
        }
    }
    out.push_str(eol);
    out.push_str(&indent);
    out.push_str("\"\"\"");
    out
}

/// Whether `text` reads back unchanged from [`block_string()`].
///
/// Block strings drop their leading and trailing blank lines and the
/// indentation common to their lines. They cannot escape control characters
/// either. Such text is quoted instead.
pub(crate) fn is_block_string_safe(text: &str) -> bool {
    if text.chars().any(|c| c.is_control() && c != '\n' && c != '\t') {
        return false;
    }

    let is_blank = |line: &str| line.trim_start().is_empty();
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.first().is_none_or(|line| is_blank(line))
        || lines.last().is_none_or(|line| is_blank(line)) {
        return false;
    }

    lines.iter()
        .filter(|line| !is_blank(line))
        .any(|line| !line.starts_with(char::is_whitespace))
}

pub(crate) fn quoted_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
