//! Animation lines and their extraction from a container.

use crate::dom::{Document, NodeId};

/// Attribute declaring a line's kind on a render target.
pub const LINE_ATTR: &str = "data-ty";

/// How a line is played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Shown at once, no delay
    Literal,
    /// Typed glyph by glyph
    Input,
    /// Placeholder held for a fixed duration
    Progress,
}

impl LineKind {
    /// Parse a `data-ty` value. Anything other than `input` or `progress` is literal.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("input") => LineKind::Input,
            Some("progress") => LineKind::Progress,
            _ => LineKind::Literal,
        }
    }

    /// The attribute value written back for this kind.
    pub fn as_attr(&self) -> &'static str {
        match self {
            LineKind::Literal => "",
            LineKind::Input => "input",
            LineKind::Progress => "progress",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Literal => "literal",
            LineKind::Input => "input",
            LineKind::Progress => "progress",
        }
    }
}

/// One unit of scripted output bound to its render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationLine {
    pub kind: LineKind,
    /// Content to reveal, whitespace preserved
    pub text: String,
    /// Element that displays the revealed text
    pub target: NodeId,
}

/// Collect the lines declared inside `container`.
///
/// Every descendant carrying a `data-ty` attribute becomes a line, in
/// document order. The text is taken verbatim from the element's content.
pub fn extract_lines(doc: &Document, container: NodeId) -> Vec<AnimationLine> {
    doc.query_attribute(container, LINE_ATTR)
        .into_iter()
        .filter_map(|target| {
            let el = doc.get(target)?;
            Some(AnimationLine {
                kind: LineKind::from_attr(el.attribute(LINE_ATTR)),
                text: el.text().to_string(),
                target,
            })
        })
        .collect()
}
