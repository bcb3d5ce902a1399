//! Per-frame callback registration.
//!
//! The controller never sleeps or spawns: an animated commit asks the host's
//! [`FrameScheduler`] for a frame and returns. The host later calls
//! `ViewportController::on_frame` with the id it handed out.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Handle for one outstanding frame registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequestId(u64);

impl FrameRequestId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

/// Host hook for next-frame callbacks.
pub trait FrameScheduler {
    /// Register interest in the next frame.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Drop a registration that has not fired yet. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: FrameRequestId);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> FrameRequestId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        (**self).cancel_frame(id)
    }
}

#[derive(Debug, Default)]
struct ManualState {
    next_id: u64,
    pending: Vec<FrameRequestId>,
    requested: u64,
    cancelled: u64,
}

/// Scheduler whose frames fire only when the host drains them.
///
/// Clones share state, so a host keeps one handle for draining while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every registration that is due.
    pub fn take_due(&self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.state.lock().pending)
    }

    /// Registrations waiting to fire.
    pub fn outstanding(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Total frames requested so far.
    pub fn requested_count(&self) -> u64 {
        self.state.lock().requested
    }

    /// Total registrations cancelled before firing.
    pub fn cancelled_count(&self) -> u64 {
        self.state.lock().cancelled
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        let mut state = self.state.lock();
        state.next_id += 1;
        state.requested += 1;
        let id = FrameRequestId(state.next_id);
        state.pending.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        let mut state = self.state.lock();
        let before = state.pending.len();
        state.pending.retain(|pending| *pending != id);
        if state.pending.len() < before {
            state.cancelled += 1;
        }
    }
}
