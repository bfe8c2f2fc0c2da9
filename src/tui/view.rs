//! Terminal window widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::render::{RowKind, TerminalSnapshot};

use super::theme::Theme;

/// Draws one terminal container inside a rounded frame.
#[derive(Debug)]
pub struct TerminalView<'a> {
    snapshot: &'a TerminalSnapshot,
    theme: &'a Theme,
    prompt: &'a str,
}

impl<'a> TerminalView<'a> {
    pub fn new(snapshot: &'a TerminalSnapshot, theme: &'a Theme, prompt: &'a str) -> Self {
        Self {
            snapshot,
            theme,
            prompt,
        }
    }

    /// Rows needed at `width` columns to show every line plus the frame.
    pub fn height(&self, width: u16) -> u16 {
        let rows = self
            .snapshot
            .wrapped_height(self.prompt, width.saturating_sub(2))
            .max(1);
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        self.snapshot
            .rows
            .iter()
            .map(|row| match row.kind {
                RowKind::Input => Line::from(vec![
                    Span::styled(self.prompt, self.theme.prompt_style()),
                    Span::styled(row.text.as_str(), self.theme.input_style()),
                ]),
                RowKind::Output => Line::styled(row.text.as_str(), self.theme.text_style()),
                RowKind::Placeholder => {
                    Line::styled(row.text.as_str(), self.theme.placeholder_style())
                }
                RowKind::Cursor => Line::styled(row.text.as_str(), self.theme.cursor_style()),
            })
            .collect()
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style());
        if let Some(title) = &self.snapshot.title {
            block = block.title(format!(" {} ", title));
        }

        // Keep the newest rows visible when the window is too short
        let inner_height = area.height.saturating_sub(2) as usize;
        let total = self
            .snapshot
            .wrapped_height(self.prompt, area.width.saturating_sub(2));
        let scroll = u16::try_from(total.saturating_sub(inner_height)).unwrap_or(u16::MAX);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
