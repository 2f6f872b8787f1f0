//! Trailing-edge debouncing driven by a host clock.
//!
//! Timers here are plain data: a pending value and a deadline. Nothing runs in
//! the background; the owner calls `poll` with the current `Instant` and gets
//! the value back once the quiet period has elapsed. This keeps cancellation
//! trivially safe after teardown and makes timing fully deterministic in tests.

use crate::data_types::Domain;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Collapses bursts of values into the last one, delivered after `delay` of silence.
#[derive(Clone, Debug)]
pub struct DebounceTimer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> DebounceTimer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the quiet period from `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drops the pending value. Returns whether one was pending; calling it on
    /// an idle, fired or already cancelled timer is a no-op.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

/// An update released by [`DebouncedUpdateScheduler::poll`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScheduledUpdate {
    /// Overview brush to commit to the zoom store.
    Zoom(Domain),
    /// Detail-chart selection to filter against.
    Selection(Domain),
}

/// Two independent debounce channels for the two drag gestures of the view.
#[derive(Clone, Debug)]
pub struct DebouncedUpdateScheduler {
    zoom: DebounceTimer<Domain>,
    selection: DebounceTimer<Domain>,
}

impl DebouncedUpdateScheduler {
    pub fn new(zoom_delay: Duration, selection_delay: Duration) -> Self {
        Self {
            zoom: DebounceTimer::new(zoom_delay),
            selection: DebounceTimer::new(selection_delay),
        }
    }

    /// The overview brush moved.
    pub fn zoom_changed(&mut self, zoom: Domain, now: Instant) {
        self.zoom.schedule(zoom, now);
    }

    /// The detail chart was zoomed or panned.
    pub fn selection_changed(&mut self, selection: Domain, now: Instant) {
        self.selection.schedule(selection, now);
    }

    /// Expired updates, oldest deadline first.
    pub fn poll(&mut self, now: Instant) -> Vec<ScheduledUpdate> {
        let mut fired = Vec::with_capacity(2);
        let zoom_deadline = self.zoom.deadline();
        if let Some(zoom) = self.zoom.poll(now) {
            fired.push((zoom_deadline, ScheduledUpdate::Zoom(zoom)));
        }
        let selection_deadline = self.selection.deadline();
        if let Some(selection) = self.selection.poll(now) {
            fired.push((selection_deadline, ScheduledUpdate::Selection(selection)));
        }
        fired.sort_by_key(|(deadline, _)| *deadline);
        fired.into_iter().map(|(_, update)| update).collect()
    }

    /// Earliest pending deadline across both channels.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.zoom.deadline(), self.selection.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn cancel_all(&mut self) {
        self.zoom.cancel();
        self.selection.cancel();
    }
}
