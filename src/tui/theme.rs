//! Theme configuration for the player and plain output
//!
//! Centralizes all color and style definitions for terminal windows.
//! Provides both ratatui styles (for the TUI) and ANSI escape codes (for plain output).

use ratatui::style::{Color, Modifier, Style};

/// Colors used when drawing a terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Literal output lines
    pub text: Color,
    /// Prompt drawn before input lines
    pub prompt: Color,
    /// Typed input text
    pub input: Color,
    /// Progress placeholder
    pub placeholder: Color,
    /// Cursor glyph
    pub cursor: Color,
    /// Window frame and title
    pub border: Color,
    /// Footer hints
    pub hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray output with a green prompt.
    pub fn standard() -> Self {
        Self {
            text: Color::Gray,
            prompt: Color::Green,
            input: Color::White,
            placeholder: Color::Yellow,
            cursor: Color::Gray,
            border: Color::DarkGray,
            hint: Color::DarkGray,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text: Color::White,
            prompt: Color::White,
            input: Color::White,
            placeholder: Color::White,
            cursor: Color::White,
            border: Color::Gray,
            hint: Color::DarkGray,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text: Color::Cyan,
            prompt: Color::LightCyan,
            input: Color::White,
            placeholder: Color::LightBlue,
            cursor: Color::LightCyan,
            border: Color::Blue,
            hint: Color::DarkGray,
        }
    }

    /// Look a theme up by its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" | "standard" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.prompt).add_modifier(Modifier::BOLD)
    }

    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint)
    }

    // ANSI color helpers for plain output

    /// Format text with the prompt color.
    pub fn prompt_text(&self, text: &str) -> String {
        paint(self.prompt, text)
    }

    /// Format text with the input color.
    pub fn input_text(&self, text: &str) -> String {
        paint(self.input, text)
    }

    /// Format text with the literal output color.
    pub fn output_text(&self, text: &str) -> String {
        paint(self.text, text)
    }

    /// Format text with the placeholder color.
    pub fn placeholder_text(&self, text: &str) -> String {
        paint(self.placeholder, text)
    }

    /// Format text with the hint color.
    pub fn hint_text(&self, text: &str) -> String {
        paint(self.hint, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}
