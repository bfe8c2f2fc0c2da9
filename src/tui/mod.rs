//! TUI (Text User Interface) module for typecast
//!
//! This module provides the full-screen player using ratatui/crossterm.

mod input;
mod player;
pub mod state;
pub mod theme;
mod view;

pub use player::{draw, play, PlaybackResult, PlayerOptions};
pub use state::{InputResult, PlayerState};
pub use theme::Theme;
pub use view::TerminalView;
