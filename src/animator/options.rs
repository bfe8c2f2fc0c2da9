//! Per-session animation timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and glyph settings for one animator session.
///
/// Serialized as the `[animator]` section of the config file. Missing fields
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorOptions {
    /// Delay before the cursor appears and line 0 starts
    pub start_delay_ms: u64,
    /// Interval between typed glyphs
    pub char_delay_ms: u64,
    /// How long a progress line holds its placeholder
    pub progress_delay_ms: u64,
    /// Text shown by progress lines
    pub progress_placeholder: String,
    /// Content of the cursor element
    pub cursor_glyph: String,
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            start_delay_ms: 600,
            char_delay_ms: 75,
            progress_delay_ms: 2000,
            progress_placeholder: "[Processing...]".to_string(),
            cursor_glyph: "\u{2588}".to_string(),
        }
    }
}

impl AnimatorOptions {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(self.progress_delay_ms)
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        start_delay_ms: Option<u64>,
        char_delay_ms: Option<u64>,
        progress_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(ms) = start_delay_ms {
            self.start_delay_ms = ms;
        }
        if let Some(ms) = char_delay_ms {
            self.char_delay_ms = ms;
        }
        if let Some(ms) = progress_delay_ms {
            self.progress_delay_ms = ms;
        }
        self
    }
}
