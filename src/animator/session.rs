//! Playback state machine for one terminal container.
//!
//! A session never runs on its own: the host pops due timers from the shared
//! [`TimerQueue`] and hands each step to [`AnimatorSession::handle`]. Every
//! step schedules at most one successor, so a live session owns at most one
//! pending timer, and [`AnimatorSession::stop`] cancels it in the queue.

use std::collections::BTreeSet;

use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::dom::{Document, NodeId};

use super::line::{AnimationLine, LineKind};
use super::options::AnimatorOptions;
use super::timer::{TimerId, TimerQueue};

/// Class added to a render target once its line has started.
pub const RENDERED_CLASS: &str = "type";
/// Class of the cursor element.
pub const CURSOR_CLASS: &str = "ty-cursor";

/// Identifier of a session within its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u32);

impl SessionId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the start delay to elapse
    Pending,
    /// Cursor inserted, lines animating
    Running,
    /// All lines finished
    Terminal,
    /// Stopped before finishing
    Cancelled,
}

/// A scheduled unit of work for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Insert the cursor and start line 0
    Begin,
    /// Commit glyph `glyph` of input line `line`
    RevealGlyph { line: usize, glyph: usize },
    /// Finish line `line` and move on
    Advance { line: usize },
}

/// Timer payload shared by every session of a host.
pub type Task = (SessionId, Step);

/// Observable things a session did, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Scheduled,
    CursorInserted,
    LineStarted { index: usize, kind: LineKind },
    GlyphRevealed { index: usize, glyph: String },
    PlaceholderShown { index: usize },
    LineFinished { index: usize },
    Finished,
    Cancelled,
}

/// Mutable world a session step operates on.
#[derive(Debug)]
pub struct StepContext<'a> {
    pub doc: &'a mut Document,
    pub queue: &'a mut TimerQueue<Task>,
    pub events: &'a mut Vec<SessionEvent>,
}

/// Live playback state for one container.
#[derive(Debug)]
pub struct AnimatorSession {
    id: SessionId,
    container: NodeId,
    lines: Vec<AnimationLine>,
    /// Grapheme clusters per line (empty for non-input lines)
    glyphs: Vec<Vec<String>>,
    options: AnimatorOptions,
    cursor: Option<NodeId>,
    active_index: usize,
    state: SessionState,
    timers: BTreeSet<TimerId>,
}

impl AnimatorSession {
    pub fn new(
        id: SessionId,
        container: NodeId,
        lines: Vec<AnimationLine>,
        options: AnimatorOptions,
    ) -> Self {
        let glyphs = lines
            .iter()
            .map(|line| match line.kind {
                LineKind::Input => line.text.graphemes(true).map(str::to_string).collect(),
                _ => Vec::new(),
            })
            .collect();
        Self {
            id,
            container,
            lines,
            glyphs,
            options,
            cursor: None,
            active_index: 0,
            state: SessionState::Pending,
            timers: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn lines(&self) -> &[AnimationLine] {
        &self.lines
    }

    pub fn options(&self) -> &AnimatorOptions {
        &self.options
    }

    pub fn cursor(&self) -> Option<NodeId> {
        self.cursor
    }

    /// Index of the line currently animating (`lines().len()` once terminal).
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether scheduled steps may still mutate the document.
    pub fn is_live(&self) -> bool {
        matches!(self.state, SessionState::Pending | SessionState::Running)
    }

    /// Number of timers this session still has in the queue.
    pub fn outstanding_timers(&self) -> usize {
        self.timers.len()
    }

    /// Arm the start delay. Only the first call has any effect.
    pub fn start(&mut self, cx: &mut StepContext<'_>) {
        if self.state != SessionState::Pending || !self.timers.is_empty() {
            return;
        }
        self.schedule(cx.queue, self.options.start_delay(), Step::Begin);
        cx.events.push(SessionEvent::Scheduled);
    }

    /// Cancel every outstanding timer and freeze the session.
    ///
    /// Returns false (and does nothing) when the session already ended.
    pub fn stop(&mut self, cx: &mut StepContext<'_>) -> bool {
        if !self.is_live() {
            return false;
        }
        for id in std::mem::take(&mut self.timers) {
            cx.queue.cancel(id);
        }
        self.state = SessionState::Cancelled;
        cx.events.push(SessionEvent::Cancelled);
        debug!(session = self.id.get(), line = self.active_index, "session stopped");
        true
    }

    /// Run one step fired by timer `timer`.
    pub fn handle(&mut self, timer: TimerId, step: Step, cx: &mut StepContext<'_>) {
        self.timers.remove(&timer);
        if !self.is_live() {
            trace!(session = self.id.get(), ?step, "ignoring step for ended session");
            return;
        }
        match step {
            Step::Begin => self.begin(cx),
            Step::RevealGlyph { line, glyph } => self.reveal(line, glyph, cx),
            Step::Advance { line } => {
                if line == self.active_index {
                    self.advance(cx);
                }
            }
        }
    }

    /// Put every render target back to its extracted text and state.
    pub fn restore(&self, doc: &mut Document) {
        for line in &self.lines {
            doc.set_text(line.target, &line.text);
            doc.remove_class(line.target, RENDERED_CLASS);
            doc.remove_attribute(line.target, "type");
        }
        if let Some(cursor) = self.cursor {
            doc.remove(cursor);
        }
    }

    fn schedule(&mut self, queue: &mut TimerQueue<Task>, delay: std::time::Duration, step: Step) {
        let id = queue.schedule(delay, (self.id, step));
        self.timers.insert(id);
    }

    fn begin(&mut self, cx: &mut StepContext<'_>) {
        if self.state != SessionState::Pending {
            return;
        }
        let cursor = cx.doc.create_element("span");
        cx.doc.add_class(cursor, CURSOR_CLASS);
        cx.doc.set_text(cursor, &self.options.cursor_glyph);
        if cx.doc.append_child(self.container, cursor) {
            self.cursor = Some(cursor);
            cx.events.push(SessionEvent::CursorInserted);
        } else {
            debug!(session = self.id.get(), "container missing, cursor not inserted");
        }
        self.state = SessionState::Running;
        self.run_from_active(cx);
    }

    /// Animate lines starting at `active_index` until one needs a timer.
    fn run_from_active(&mut self, cx: &mut StepContext<'_>) {
        while self.active_index < self.lines.len() {
            let index = self.active_index;
            let kind = self.lines[index].kind;
            let target = self.lines[index].target;
            cx.events.push(SessionEvent::LineStarted { index, kind });
            trace!(session = self.id.get(), index, kind = kind.name(), "line started");

            match kind {
                LineKind::Literal => {
                    self.mutate(cx.doc.add_class(target, RENDERED_CLASS), target);
                    self.finish_line(cx);
                }
                LineKind::Input => {
                    let ok = cx.doc.add_class(target, RENDERED_CLASS)
                        && cx.doc.set_attribute(target, "type", kind.as_attr())
                        && cx.doc.set_text(target, "");
                    self.mutate(ok, target);
                    let next = if self.glyphs[index].is_empty() {
                        Step::Advance { line: index }
                    } else {
                        Step::RevealGlyph {
                            line: index,
                            glyph: 0,
                        }
                    };
                    self.schedule(cx.queue, self.options.char_delay(), next);
                    return;
                }
                LineKind::Progress => {
                    let ok = cx.doc.add_class(target, RENDERED_CLASS)
                        && cx.doc.set_text(target, &self.options.progress_placeholder);
                    self.mutate(ok, target);
                    cx.events.push(SessionEvent::PlaceholderShown { index });
                    self.schedule(
                        cx.queue,
                        self.options.progress_delay(),
                        Step::Advance { line: index },
                    );
                    return;
                }
            }
        }
        self.state = SessionState::Terminal;
        cx.events.push(SessionEvent::Finished);
        debug!(session = self.id.get(), lines = self.lines.len(), "session finished");
    }

    fn reveal(&mut self, line: usize, glyph: usize, cx: &mut StepContext<'_>) {
        if line != self.active_index {
            return;
        }
        let Some(text) = self.glyphs[line].get(glyph).cloned() else {
            return;
        };
        let target = self.lines[line].target;
        self.mutate(cx.doc.push_text(target, &text), target);
        cx.events.push(SessionEvent::GlyphRevealed {
            index: line,
            glyph: text,
        });

        let next = if glyph + 1 < self.glyphs[line].len() {
            Step::RevealGlyph {
                line,
                glyph: glyph + 1,
            }
        } else {
            Step::Advance { line }
        };
        self.schedule(cx.queue, self.options.char_delay(), next);
    }

    fn advance(&mut self, cx: &mut StepContext<'_>) {
        self.finish_line(cx);
        self.run_from_active(cx);
    }

    fn finish_line(&mut self, cx: &mut StepContext<'_>) {
        cx.events.push(SessionEvent::LineFinished {
            index: self.active_index,
        });
        self.active_index += 1;
    }

    fn mutate(&self, ok: bool, target: NodeId) {
        if !ok {
            debug!(
                session = self.id.get(),
                target = target.index(),
                "render target missing, step skipped"
            );
        }
    }
}
