use std::time::{Duration, Instant};

/// Cancel token returned by `TimerQueue::schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct PendingTimer<E> {
    id: u64,
    due: Instant,
    event: E,
}

/// Deferred events keyed by deadline.
///
/// The queue never reads the clock: callers pass `now` to `schedule` and
/// `poll`, so the UI drives it from its frame loop and tests drive it with
/// synthetic instants.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_id: u64,
    pending: Vec<PendingTimer<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            due: now + delay,
            event,
        });
        TimerHandle(id)
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != handle.0);
        self.pending.len() != before
    }

    /// Drops every pending timer and returns how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Removes and returns every event due at `now`, earliest first.
    /// Timers with the same deadline fire in the order they were scheduled.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|timer| timer.due <= now);
        self.pending = waiting;
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.id.cmp(&b.id)));
        due.into_iter().map(|timer| timer.event).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|timer| timer.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
