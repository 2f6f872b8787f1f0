use crate::data_types::DataPoint;
use crate::debounce::DebounceTimer;
use std::time::{Duration, Instant};
use tracing::trace;

/// State of the single detail-chart tooltip.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Hidden,
    /// Shown while hovering; hides again shortly after the pointer leaves.
    Preview(DataPoint),
    /// Pinned by a click; only an explicit close or another click changes it.
    Locked(DataPoint),
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    pub fn target(&self) -> Option<&DataPoint> {
        match self {
            Self::Hidden => None,
            Self::Preview(p) | Self::Locked(p) => Some(p),
        }
    }
}

/// Hover-preview / click-lock / close state machine with a debounced hide.
#[derive(Clone, Debug)]
pub struct TooltipController {
    state: TooltipState,
    hide: DebounceTimer<()>,
}

impl TooltipController {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            state: TooltipState::Hidden,
            hide: DebounceTimer::new(hide_delay),
        }
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Shows or retargets the preview. Ignored while locked.
    pub fn hover(&mut self, point: DataPoint) -> bool {
        if self.state.is_locked() {
            return false;
        }
        self.hide.cancel();
        trace!(revision = %point.revision, "tooltip preview");
        self.replace(TooltipState::Preview(point))
    }

    /// Locks the tooltip on `point`, whatever the current state.
    pub fn click(&mut self, point: DataPoint) -> bool {
        self.hide.cancel();
        trace!(revision = %point.revision, "tooltip locked");
        self.replace(TooltipState::Locked(point))
    }

    /// Arms (or re-arms) the hide timer.
    pub fn mouse_out(&mut self, now: Instant) {
        if self.state.is_visible() {
            self.hide.schedule((), now);
        }
    }

    /// Hides immediately, lock or not.
    pub fn close(&mut self) -> bool {
        self.hide.cancel();
        trace!("tooltip closed");
        self.replace(TooltipState::Hidden)
    }

    /// Applies an expired hide. A locked tooltip survives it.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.hide.poll(now).is_none() {
            return false;
        }
        if !matches!(self.state, TooltipState::Preview(_)) {
            return false;
        }
        trace!("tooltip preview expired");
        self.replace(TooltipState::Hidden)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide.deadline()
    }

    pub fn cancel_pending(&mut self) {
        self.hide.cancel();
    }

    fn replace(&mut self, next: TooltipState) -> bool {
        if self.state == next {
            return false;
        }
        self.state = next;
        true
    }
}
