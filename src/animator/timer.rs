//! Cooperative single-threaded timer queue on a virtual clock.
//!
//! Tasks are ordered by (deadline, scheduling sequence), so tasks sharing a
//! deadline fire in the order they were scheduled. The clock only moves when
//! the owner advances it; nothing runs in the background.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    deadline: Duration,
    seq: u64,
}

impl TimerId {
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// Virtual-clock task queue.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: BTreeMap<TimerId, T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId {
            deadline: self.now + delay,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(id, task);
        id
    }

    /// Remove a pending task. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.pending.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(TimerId::deadline)
    }

    /// Pop the earliest task due at or before `limit`, moving the clock to its deadline.
    ///
    /// Tasks scheduled while handling a popped task are visible to the next
    /// call, so chains of zero-delay tasks drain within the same window.
    pub fn pop_due(&mut self, limit: Duration) -> Option<(TimerId, T)> {
        let id = *self.pending.keys().next()?;
        if id.deadline > limit {
            return None;
        }
        let task = self.pending.remove(&id)?;
        self.now = self.now.max(id.deadline);
        Some((id, task))
    }

    /// Move the clock forward without firing anything.
    ///
    /// The clock never goes backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
