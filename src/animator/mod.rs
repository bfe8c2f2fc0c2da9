//! Scripted terminal typing animator.
//!
//! A terminal container declares its lines as children tagged with a
//! `data-ty` attribute. A session plays those lines back one at a time:
//!
//! - literal lines appear at once
//! - input lines are typed one grapheme per `char_delay_ms`
//! - progress lines hold a placeholder for `progress_delay_ms`
//!
//! # Architecture
//!
//! - `line`: line kinds and extraction from a container
//! - `options`: timing settings
//! - `timer`: the cooperative virtual-clock queue
//! - `session`: the per-container state machine
//! - `error`: errors surfaced by the host

mod error;
mod line;
mod options;
mod session;
mod timer;

pub use error::AnimatorError;
pub use line::{extract_lines, AnimationLine, LineKind, LINE_ATTR};
pub use options::AnimatorOptions;
pub use session::{
    AnimatorSession, SessionEvent, SessionId, SessionState, Step, StepContext, Task,
    CURSOR_CLASS, RENDERED_CLASS,
};
pub use timer::{TimerId, TimerQueue};
