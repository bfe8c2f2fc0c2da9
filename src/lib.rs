//! typecast - scripted terminal typing animations
//!
//! A page declares terminal windows and their lines. The [`host::Host`]
//! turns every terminal into an animator session and plays the lines back
//! on a cooperative timer queue: commands are typed out glyph by glyph,
//! long-running steps hold a placeholder, output appears at once.
//!
//! # Module Structure
//!
//! - [`dom`] - in-memory document holding the terminal containers
//! - [`page`] - TOML/JSON page files
//! - [`animator`] - lines, timing options, timer queue and session state machine
//! - [`host`] - session factory, clock and timeline
//! - [`render`] - snapshots, text rendering and plain streaming
//! - [`tui`] - full-screen ratatui player
//! - [`config`] - config file handling
//! - [`cli`] - command line definitions

pub mod animator;
pub mod cli;
pub mod config;
pub mod dom;
pub mod host;
pub mod page;
pub mod render;
pub mod tui;

pub use animator::{AnimatorError, AnimatorOptions, LineKind, SessionId, SessionState};
pub use config::Config;
pub use host::Host;
pub use page::Page;
