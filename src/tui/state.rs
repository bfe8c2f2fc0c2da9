//! Player state management
//!
//! Maps wall-clock time onto the host's virtual clock, taking pause and
//! speed changes into account.

use std::time::{Duration, Instant};

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Replay every terminal from the start
    Restart,
    /// Exit the player
    Quit,
}

/// Playback clock and UI flags for the player.
#[derive(Debug)]
pub struct PlayerState {
    /// Whether playback is paused
    pub paused: bool,
    /// Playback speed multiplier (1.0 = normal)
    pub speed: f64,
    /// Wall clock time when playback started/resumed
    pub start_time: Instant,
    /// Virtual time reached at `start_time`
    pub time_offset: Duration,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    pub const MIN_SPEED: f64 = 0.1;
    pub const MAX_SPEED: f64 = 16.0;

    pub fn new(speed: f64) -> Self {
        Self {
            paused: false,
            speed: Self::sanitize_speed(speed),
            start_time: Instant::now(),
            time_offset: Duration::ZERO,
            needs_render: true,
        }
    }

    /// Clamp `speed` into range. Non-finite values fall back to 1.0.
    fn sanitize_speed(speed: f64) -> f64 {
        if speed.is_finite() {
            speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED)
        } else {
            1.0
        }
    }

    /// Virtual time corresponding to now.
    pub fn virtual_now(&self) -> Duration {
        self.virtual_at(Instant::now())
    }

    /// Virtual time corresponding to wall time `at`.
    pub fn virtual_at(&self, at: Instant) -> Duration {
        if self.paused {
            return self.time_offset;
        }
        let elapsed = at.saturating_duration_since(self.start_time);
        self.time_offset + elapsed.mul_f64(self.speed)
    }

    /// Wall-clock wait until virtual time `deadline` is reached.
    pub fn wall_until(&self, deadline: Duration) -> Option<Duration> {
        if self.paused {
            return None;
        }
        let remaining = deadline.saturating_sub(self.virtual_now());
        Some(remaining.div_f64(self.speed))
    }

    /// Re-anchor the clock so the current virtual time is preserved.
    fn rebase(&mut self) {
        let now = Instant::now();
        self.time_offset = self.virtual_at(now);
        self.start_time = now;
    }

    /// Toggle pause state, keeping the virtual time where it was.
    pub fn toggle_pause(&mut self) {
        self.rebase();
        self.paused = !self.paused;
        self.needs_render = true;
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.rebase();
        self.speed = (self.speed * 1.5).min(Self::MAX_SPEED);
        self.needs_render = true;
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.rebase();
        self.speed = (self.speed / 1.5).max(Self::MIN_SPEED);
        self.needs_render = true;
    }

    /// Restart the clock at virtual time `offset`.
    ///
    /// The host clock never runs backwards, so a replay anchors here at the
    /// host's current time rather than at zero.
    pub fn reset_to(&mut self, offset: Duration) {
        self.start_time = Instant::now();
        self.time_offset = offset;
        self.needs_render = true;
    }
}
