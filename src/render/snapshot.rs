//! Read-only view of a terminal container at one instant.
//!
//! Both the ratatui widget and the text renderer work from this model, so
//! they agree on which rows are visible and how each row is classified.

use unicode_width::UnicodeWidthStr;

use crate::animator::{LineKind, CURSOR_CLASS, LINE_ATTR, RENDERED_CLASS};
use crate::dom::{Document, NodeId};
use crate::page::TITLE_ATTR;

/// How a visible row should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Literal output
    Output,
    /// Typed input, drawn after the prompt
    Input,
    /// Progress placeholder
    Placeholder,
    /// The cursor element
    Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub text: String,
}

/// Visible content of one terminal container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSnapshot {
    pub container: NodeId,
    pub title: Option<String>,
    pub rows: Vec<Row>,
}

impl TerminalSnapshot {
    /// Capture `container`. Lines appear once their animation has started.
    pub fn capture(doc: &Document, container: NodeId) -> Self {
        let title = doc.attribute(container, TITLE_ATTR).map(str::to_string);
        let mut rows = Vec::new();
        for node in doc.descendants(container) {
            let Some(el) = doc.get(node) else {
                continue;
            };
            if el.has_class(CURSOR_CLASS) {
                rows.push(Row {
                    kind: RowKind::Cursor,
                    text: el.text().to_string(),
                });
                continue;
            }
            if !el.has_attribute(LINE_ATTR) || !el.has_class(RENDERED_CLASS) {
                continue;
            }
            let kind = match LineKind::from_attr(el.attribute(LINE_ATTR)) {
                LineKind::Literal => RowKind::Output,
                LineKind::Input => RowKind::Input,
                LineKind::Progress => RowKind::Placeholder,
            };
            rows.push(Row {
                kind,
                text: el.text().to_string(),
            });
        }
        Self {
            container,
            title,
            rows,
        }
    }

    /// Plain text lines, input rows prefixed with `prompt`.
    pub fn lines(&self, prompt: &str) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| match row.kind {
                RowKind::Input => format!("{}{}", prompt, row.text),
                _ => row.text.clone(),
            })
            .collect()
    }

    /// Screen rows needed at `width` columns when long rows wrap.
    pub fn wrapped_height(&self, prompt: &str, width: u16) -> usize {
        let width = usize::from(width.max(1));
        self.lines(prompt)
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()).max(1).div_ceil(width))
            .sum()
    }
}
