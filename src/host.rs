//! Host page: owns the document, the timer queue and every session.
//!
//! The host is the explicit factory for sessions. It finds terminal
//! containers, guards them against double initialization, dispatches due
//! timers to their sessions and keeps a timeline of what happened when.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::animator::{
    extract_lines, AnimatorError, AnimatorOptions, AnimatorSession, SessionEvent, SessionId,
    SessionState, StepContext, Task, TimerQueue,
};
use crate::dom::{Document, NodeId};

/// Class marking an element as a terminal container.
pub const CONTAINER_CLASS: &str = "termynal";
/// Attribute recording whether a container currently has a session.
pub const INIT_ATTR: &str = "data-termynal";

/// A session event stamped with the virtual time it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub at: Duration,
    pub session: SessionId,
    pub event: SessionEvent,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}ms  t{}  ", self.at.as_millis(), self.session.get())?;
        match &self.event {
            SessionEvent::Scheduled => write!(f, "scheduled"),
            SessionEvent::CursorInserted => write!(f, "cursor"),
            SessionEvent::LineStarted { index, kind } => {
                write!(f, "line {} start ({})", index, kind.name())
            }
            SessionEvent::GlyphRevealed { index, glyph } => {
                write!(f, "line {} glyph {:?}", index, glyph)
            }
            SessionEvent::PlaceholderShown { index } => write!(f, "line {} placeholder", index),
            SessionEvent::LineFinished { index } => write!(f, "line {} done", index),
            SessionEvent::Finished => write!(f, "finished"),
            SessionEvent::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Owner of a document and the sessions animating it.
#[derive(Debug)]
pub struct Host {
    doc: Document,
    options: AnimatorOptions,
    queue: TimerQueue<Task>,
    sessions: BTreeMap<SessionId, AnimatorSession>,
    by_container: HashMap<NodeId, SessionId>,
    next_id: u32,
    timeline: Vec<TimelineEntry>,
    recording: bool,
}

impl Host {
    pub fn new(doc: Document, options: AnimatorOptions) -> Self {
        Self {
            doc,
            options,
            queue: TimerQueue::new(),
            sessions: BTreeMap::new(),
            by_container: HashMap::new(),
            next_id: 1,
            timeline: Vec::new(),
            recording: true,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn options(&self) -> &AnimatorOptions {
        &self.options
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    /// Every terminal container in document order.
    pub fn containers(&self) -> Vec<NodeId> {
        self.doc.query_class(self.doc.root(), CONTAINER_CLASS)
    }

    pub fn is_initialized(&self, container: NodeId) -> bool {
        self.doc.attribute(container, INIT_ATTR) == Some("true")
    }

    /// Start a session on every container that does not have one yet.
    pub fn attach_all(&mut self) -> Vec<SessionId> {
        let mut started = Vec::new();
        for container in self.containers() {
            if self.is_initialized(container) {
                continue;
            }
            match self.start(container) {
                Ok(id) => started.push(id),
                Err(e) => warn!(container = container.index(), "skipping container: {}", e),
            }
        }
        started
    }

    /// Start a session on `container`.
    ///
    /// Fails when the container is gone or already animating. A container
    /// whose previous session was stopped is reset before the new one starts.
    pub fn start(&mut self, container: NodeId) -> Result<SessionId, AnimatorError> {
        if !self.doc.contains(container) {
            return Err(AnimatorError::NotAnElement(container));
        }
        if self.is_initialized(container) {
            return Err(AnimatorError::AlreadyInitialized { container });
        }
        if let Some(old) = self.by_container.remove(&container) {
            if let Some(session) = self.sessions.remove(&old) {
                session.restore(&mut self.doc);
            }
        }
        self.doc.set_attribute(container, INIT_ATTR, "true");

        let id = SessionId::new(self.next_id);
        self.next_id += 1;
        let lines = extract_lines(&self.doc, container);
        debug!(
            session = id.get(),
            container = container.index(),
            lines = lines.len(),
            "session created"
        );

        let mut session = AnimatorSession::new(id, container, lines, self.options.clone());
        let mut events = Vec::new();
        session.start(&mut StepContext {
            doc: &mut self.doc,
            queue: &mut self.queue,
            events: &mut events,
        });
        self.sessions.insert(id, session);
        self.by_container.insert(container, id);
        self.record(id, events);
        Ok(id)
    }

    /// Stop a session. Returns `Ok(false)` when it had already ended.
    pub fn stop(&mut self, id: SessionId) -> Result<bool, AnimatorError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(AnimatorError::UnknownSession(id))?;
        let mut events = Vec::new();
        let stopped = session.stop(&mut StepContext {
            doc: &mut self.doc,
            queue: &mut self.queue,
            events: &mut events,
        });
        if stopped {
            let container = session.container();
            self.doc.set_attribute(container, INIT_ATTR, "false");
        }
        self.record(id, events);
        Ok(stopped)
    }

    /// Stop whatever runs on `container` and play it again from the start.
    pub fn restart(&mut self, container: NodeId) -> Result<SessionId, AnimatorError> {
        if let Some(id) = self.session_for(container).map(AnimatorSession::id) {
            self.stop(id)?;
            self.doc.set_attribute(container, INIT_ATTR, "false");
        }
        self.start(container)
    }

    /// Stop the container's session and detach the container from the document.
    pub fn teardown(&mut self, container: NodeId) -> bool {
        if let Some(id) = self.session_for(container).map(AnimatorSession::id) {
            // Known id, cannot fail
            let _ = self.stop(id);
        }
        self.doc.remove(container)
    }

    /// Stop every session and drop all pending timers.
    pub fn navigate_away(&mut self) {
        let ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        for id in ids {
            let _ = self.stop(id);
        }
        self.queue.clear();
        debug!(at = ?self.now(), "navigated away");
    }

    pub fn session(&self, id: SessionId) -> Option<&AnimatorSession> {
        self.sessions.get(&id)
    }

    pub fn session_for(&self, container: NodeId) -> Option<&AnimatorSession> {
        self.by_container
            .get(&container)
            .and_then(|id| self.sessions.get(id))
    }

    pub fn sessions(&self) -> impl Iterator<Item = &AnimatorSession> {
        self.sessions.values()
    }

    /// No timers left to fire.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Every session reached a final state.
    pub fn all_finished(&self) -> bool {
        self.sessions.values().all(|s| {
            matches!(
                s.state(),
                SessionState::Terminal | SessionState::Cancelled
            )
        })
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    /// Move the clock forward by `by`, firing everything due on the way.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Fire every task due at or before `target`, then set the clock to `target`.
    pub fn advance_to(&mut self, target: Duration) {
        while let Some((timer, (id, step))) = self.queue.pop_due(target) {
            let Some(session) = self.sessions.get_mut(&id) else {
                trace!(session = id.get(), "timer for unknown session dropped");
                continue;
            };
            let mut events = Vec::new();
            session.handle(
                timer,
                step,
                &mut StepContext {
                    doc: &mut self.doc,
                    queue: &mut self.queue,
                    events: &mut events,
                },
            );
            self.record(id, events);
        }
        self.queue.set_now(target);
    }

    /// Fire timers until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(deadline) = self.queue.next_deadline() {
            self.advance_to(deadline);
        }
    }

    /// Timeline entries recorded and not yet drained.
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Take every entry recorded since the previous call.
    pub fn drain_events(&mut self) -> Vec<TimelineEntry> {
        std::mem::take(&mut self.timeline)
    }

    /// Turn timeline recording on or off. Sessions run the same either way.
    pub fn set_recording(&mut self, on: bool) {
        self.recording = on;
    }

    fn record(&mut self, session: SessionId, events: Vec<SessionEvent>) {
        if !self.recording {
            return;
        }
        let at = self.queue.now();
        self.timeline
            .extend(events.into_iter().map(|event| TimelineEntry { at, session, event }));
    }
}
