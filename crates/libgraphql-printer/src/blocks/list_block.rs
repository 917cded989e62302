use crate::blocks::Block;
use crate::blocks::BoxedBlock;
use crate::blocks::text_length;
use crate::collector::Collector;
use crate::context::Context;
use crate::print_error::Result;

/// How a [`ListBlock`] places its items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ListLayout {
    /// `(a, b)` on one line. Broken lists put every item on its own line
    /// one level deeper and close on a line of their own.
    Wrapped {
        prefix: &'static str,
        suffix: &'static str,
    },

    /// `implements A & B` on one line. Broken lists lead every item with the
    /// sigil, one level deeper than the keyword.
    Sigil {
        keyword: &'static str,
        sigil: &'static str,
    },

    /// Items separated by a space, or by a line break at the current level.
    Stacked,

    /// Top-level definitions separated by a blank line.
    Document,
}

/// An ordered sequence of blocks laid out on one line when it fits within
/// the line length, and one item per line otherwise.
pub(crate) struct ListBlock<'a> {
    always_multiline: bool,
    blank_lines: bool,
    empty: &'static str,
    items: Vec<BoxedBlock<'a>>,
    layout: ListLayout,
    normalized: bool,
}
impl<'a> ListBlock<'a> {
    fn new(layout: ListLayout, items: Vec<BoxedBlock<'a>>) -> Self {
        Self {
            always_multiline: false,
            blank_lines: false,
            empty: "",
            items,
            layout,
            normalized: false,
        }
    }

    pub fn document(items: Vec<BoxedBlock<'a>>) -> Self {
        Self::new(ListLayout::Document, items)
    }

    pub fn sigil(
        keyword: &'static str,
        sigil: &'static str,
        items: Vec<BoxedBlock<'a>>,
    ) -> Self {
        Self::new(ListLayout::Sigil { keyword, sigil }, items)
    }

    pub fn stacked(items: Vec<BoxedBlock<'a>>) -> Self {
        Self::new(ListLayout::Stacked, items)
    }

    pub fn wrapped(
        prefix: &'static str,
        suffix: &'static str,
        items: Vec<BoxedBlock<'a>>,
    ) -> Self {
        Self::new(ListLayout::Wrapped { prefix, suffix }, items)
    }

    pub fn always_multiline(self, always_multiline: bool) -> Self {
        Self { always_multiline, ..self }
    }

    /// Surround items that span several lines with blank lines.
    pub fn blank_lines(self, blank_lines: bool) -> Self {
        Self { blank_lines, ..self }
    }

    /// Text rendered when every item is empty or filtered out.
    pub fn empty(self, empty: &'static str) -> Self {
        Self { empty, ..self }
    }

    pub fn normalized(self, normalized: bool) -> Self {
        Self { normalized, ..self }
    }

    fn ordered_items(&self) -> Vec<&BoxedBlock<'a>> {
        let mut items: Vec<&BoxedBlock<'a>> = self.items.iter().collect();
        if self.normalized {
            // Stable, so equal names keep their input order.
            items.sort_by(|a, b| a.name().cmp(&b.name()));
        }
        items
    }

    fn serialize_single_line(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        items: &[&BoxedBlock<'a>],
        level: usize,
        used: usize,
    ) -> Result<Option<String>> {
        let space = ctx.space();
        let (open, separator, close, item_level) = match self.layout {
            ListLayout::Wrapped { prefix, suffix } => (
                prefix.to_string(),
                format!(",{space}"),
                suffix.to_string(),
                level + 1,
            ),
            ListLayout::Sigil { keyword, sigil } => (
                format!("{keyword}{space}"),
                format!("{space}{sigil}{space}"),
                String::new(),
                level + 1,
            ),
            ListLayout::Stacked | ListLayout::Document => (
                String::new(),
                space.to_string(),
                String::new(),
                level,
            ),
        };

        let line_length = ctx.settings().line_length();
        let mut scratch = Collector::default();
        let mut parts: Vec<String> = vec![];
        let mut column = used.saturating_add(text_length(&open));
        for item in items {
            if column > line_length {
                return Ok(None);
            }
            let separator_length = if parts.is_empty() {
                0
            } else {
                text_length(&separator)
            };
            let text = item.serialize(
                ctx,
                &mut scratch,
                item_level,
                column.saturating_add(separator_length),
            )?;
            if text.is_empty() {
                continue;
            }
            if ctx.is_multiline(&text) {
                return Ok(None);
            }

            column = column
                .saturating_add(separator_length)
                .saturating_add(text_length(&text));
            if column > line_length {
                return Ok(None);
            }
            parts.push(text);
        }

        if parts.is_empty() {
            return Ok(Some(self.empty.to_string()));
        }
        if column.saturating_add(text_length(&close)) > line_length {
            return Ok(None);
        }

        collector.merge(scratch);
        Ok(Some(format!("{open}{}{close}", parts.join(&separator))))
    }

    fn serialize_multiline(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        items: &[&BoxedBlock<'a>],
        level: usize,
        used: usize,
    ) -> Result<String> {
        let eol = ctx.eol();
        let space = ctx.space();

        let (item_level, item_prefix) = match self.layout {
            ListLayout::Wrapped { .. } => (level + 1, String::new()),
            ListLayout::Sigil { sigil, .. } => (level + 1, format!("{sigil}{space}")),
            ListLayout::Stacked | ListLayout::Document => (level, String::new()),
        };
        let indent = ctx.indent(item_level);
        let item_column = text_length(&indent) + text_length(&item_prefix);

        // Wrapped and sigil lists start every item on a fresh line; the
        // others continue on the line the list starts on.
        let leading_break = !matches!(
            self.layout,
            ListLayout::Stacked | ListLayout::Document,
        );
        let is_document = self.layout == ListLayout::Document;
        let blank_lines = self.blank_lines || is_document;

        let mut content = String::new();
        let mut previous_multiline = false;
        for item in items {
            let column = if content.is_empty() && !leading_break {
                used
            } else {
                item_column
            };
            let text = item.serialize(ctx, collector, item_level, column)?;
            if text.is_empty() {
                continue;
            }

            let multiline = ctx.is_multiline(&text);
            if content.is_empty() {
                if leading_break {
                    content.push_str(eol);
                    content.push_str(&indent);
                }
            } else {
                content.push_str(eol);
                if blank_lines && (is_document || multiline || previous_multiline) {
                    content.push_str(eol);
                }
                content.push_str(&indent);
            }
            content.push_str(&item_prefix);
            content.push_str(&text);
            previous_multiline = multiline;
        }

        if content.is_empty() {
            return Ok(self.empty.to_string());
        }

        Ok(match self.layout {
            ListLayout::Wrapped { prefix, suffix } =>
                format!("{prefix}{content}{eol}{}{suffix}", ctx.indent(level)),
            ListLayout::Sigil { keyword, .. } =>
                format!("{keyword}{content}"),
            ListLayout::Stacked | ListLayout::Document =>
                content,
        })
    }
}
impl Block for ListBlock<'_> {
    fn serialize(
        &self,
        ctx: &Context<'_>,
        collector: &mut Collector,
        level: usize,
        used: usize,
    ) -> Result<String> {
        let items = self.ordered_items();
        let single_line_allowed = !self.always_multiline
            && self.layout != ListLayout::Document;

        if single_line_allowed {
            let single_line = self.serialize_single_line(
                ctx,
                collector,
                &items,
                level,
                used,
            )?;
            if let Some(text) = single_line {
                return Ok(text);
            }
        }

        self.serialize_multiline(ctx, collector, &items, level, used)
    }
}
