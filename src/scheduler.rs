use std::time::{Duration, Instant};

/// A timer with at most one pending firing at a time
///
/// Implementors only keep track of *when* the next firing is due; whatever
/// drives the event loop is responsible for noticing that it is due and
/// calling [`GameSession::on_timer()`][crate::game::GameSession::on_timer].
pub(crate) trait Scheduler {
    /// Arrange for a firing `delay` from now, replacing any pending one
    fn schedule_next(&mut self, delay: Duration);

    /// Drop the pending firing, if any
    fn cancel(&mut self);

    fn is_pending(&self) -> bool;
}

/// A [`Scheduler`] backed by a wall-clock deadline
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct DeadlineTimer {
    deadline: Option<Instant>,
}

impl DeadlineTimer {
    pub(crate) fn new() -> DeadlineTimer {
        DeadlineTimer::default()
    }

    /// Return how long until the pending firing is due, or `None` if nothing
    /// is pending.  A firing that is already overdue yields a zero duration.
    pub(crate) fn time_left(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|when| when.saturating_duration_since(now))
    }
}

impl Scheduler for DeadlineTimer {
    fn schedule_next(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
