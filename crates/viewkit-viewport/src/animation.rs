//! Exponential smoothing towards a target transform.
//!
//! Each frame covers a fixed fraction of the remaining distance. Rotation
//! takes the short way round the circle. Once every component is within the
//! convergence threshold the session snaps onto its target and ends.

use tracing::trace;
use viewkit_core::TransformState;
use viewkit_settings::AnimationSettings;

use crate::constraints::{normalize_rotation, shortest_rotation_delta};
use crate::scheduler::{FrameRequestId, FrameScheduler};

/// Result of one smoothing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingStep {
    /// Still travelling; the value is the eased intermediate transform.
    Moving(TransformState),
    /// Close enough; the value is the exact target.
    Settled(TransformState),
}

/// Advance `current` one frame towards `target`.
pub fn smooth_step(
    current: &TransformState,
    target: &TransformState,
    factor: f64,
    threshold: f64,
) -> SmoothingStep {
    let dx = target.x - current.x;
    let dy = target.y - current.y;
    let dscale = target.scale - current.scale;
    let drotation = shortest_rotation_delta(current.rotation, target.rotation);

    if [dx, dy, dscale, drotation]
        .iter()
        .all(|delta| delta.abs() < threshold)
    {
        return SmoothingStep::Settled(*target);
    }

    SmoothingStep::Moving(TransformState {
        x: current.x + dx * factor,
        y: current.y + dy * factor,
        scale: current.scale + dscale * factor,
        rotation: normalize_rotation(current.rotation + drotation * factor),
    })
}

/// Whether an animation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Animating,
}

/// What a delivered frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// An intermediate transform to constrain and commit; another frame is booked.
    Moved(TransformState),
    /// The final transform; the session is over.
    Settled {
        transform: TransformState,
        frames: u32,
    },
}

#[derive(Debug, Clone, Copy)]
struct AnimationSession {
    target: TransformState,
    frame: FrameRequestId,
    frames: u32,
}

/// Single-slot animation state machine.
///
/// At most one session exists and it holds at most one frame registration.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    smoothing_factor: f64,
    convergence_threshold: f64,
    session: Option<AnimationSession>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(&AnimationSettings::default())
    }
}

impl AnimationDriver {
    pub fn new(settings: &AnimationSettings) -> Self {
        Self {
            smoothing_factor: settings.smoothing_factor,
            convergence_threshold: settings.convergence_threshold,
            session: None,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        match self.session {
            Some(_) => AnimationPhase::Animating,
            None => AnimationPhase::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Target of the running session.
    pub fn target(&self) -> Option<TransformState> {
        self.session.map(|s| s.target)
    }

    /// Registration the running session is waiting on.
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.session.map(|s| s.frame)
    }

    /// Start a session, or retarget the running one.
    ///
    /// Retargeting keeps the outstanding registration. Returns true when a
    /// new session was started.
    pub fn animate_to(
        &mut self,
        target: TransformState,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                trace!("Retargeting animation to {}", target);
                session.target = target;
                false
            }
            None => {
                let frame = scheduler.request_frame();
                self.session = Some(AnimationSession {
                    target,
                    frame,
                    frames: 0,
                });
                true
            }
        }
    }

    /// Abandon the running session without snapping.
    ///
    /// Returns true when there was a session to cancel.
    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        match self.session.take() {
            Some(session) => {
                scheduler.cancel_frame(session.frame);
                true
            }
            None => false,
        }
    }

    /// Handle a delivered frame.
    ///
    /// Returns `None` for a frame the session is not waiting on.
    pub fn advance(
        &mut self,
        frame: FrameRequestId,
        current: &TransformState,
        scheduler: &mut dyn FrameScheduler,
    ) -> Option<FrameOutcome> {
        let session = self.session.as_mut().filter(|s| s.frame == frame)?;
        session.frames += 1;

        match smooth_step(
            current,
            &session.target,
            self.smoothing_factor,
            self.convergence_threshold,
        ) {
            SmoothingStep::Moving(next) => {
                session.frame = scheduler.request_frame();
                Some(FrameOutcome::Moved(next))
            }
            SmoothingStep::Settled(transform) => {
                let frames = session.frames;
                self.session = None;
                Some(FrameOutcome::Settled { transform, frames })
            }
        }
    }
}
