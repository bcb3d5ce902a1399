//! Viewport controller: owns the committed transform and routes every
//! operation through the constraint policy, the animation driver and the
//! change notifier.

use std::fmt;

use tracing::{debug, info, trace, warn};
use viewkit_core::{
    Bounds, Point, Positioned, Result, SurfaceSize, TransformState, ViewportError, ViewportEvent,
};
use viewkit_settings::{AnimationSettings, Config, ViewportSettings};

use crate::animation::{AnimationDriver, FrameOutcome};
use crate::constraints::{shortest_rotation_delta, ConstraintPolicy};
use crate::gesture::GestureApplier;
use crate::mapper::{transform_matrix, CoordinateMapper, TransformMatrix};
use crate::notifier::ChangeNotifier;
use crate::scheduler::{FrameRequestId, FrameScheduler};
use crate::update::TransformUpdate;

/// Pan, zoom and rotation state for one drawing surface.
///
/// Immediate operations compose onto the current transform and cancel any
/// running animation. Animated operations compose onto the pending target,
/// so repeated presses accumulate.
pub struct ViewportController {
    surface: SurfaceSize,
    current: TransformState,
    default_transform: TransformState,
    policy: ConstraintPolicy,
    zoom_step: f64,
    driver: AnimationDriver,
    scheduler: Box<dyn FrameScheduler>,
    notifier: Box<dyn ChangeNotifier>,
}

impl ViewportController {
    /// Creates a controller from a full configuration.
    pub fn new(
        config: &Config,
        scheduler: impl FrameScheduler + 'static,
        notifier: impl ChangeNotifier + 'static,
    ) -> Self {
        Self::with_settings(&config.viewport, &config.animation, scheduler, notifier)
    }

    /// Creates a controller from its two settings sections.
    pub fn with_settings(
        viewport: &ViewportSettings,
        animation: &AnimationSettings,
        scheduler: impl FrameScheduler + 'static,
        notifier: impl ChangeNotifier + 'static,
    ) -> Self {
        let policy = ConstraintPolicy::from(viewport);
        let surface = viewport.surface();
        let default_transform = viewport.default_transform;
        Self {
            surface,
            current: policy.constrain(&default_transform, surface),
            default_transform,
            policy,
            zoom_step: viewport.zoom_step,
            driver: AnimationDriver::new(animation),
            scheduler: Box::new(scheduler),
            notifier: Box::new(notifier),
        }
    }

    /// Adopt a new surface size and restore the default transform.
    pub fn initialize(&mut self, width: f64, height: f64) -> Result<()> {
        let surface = SurfaceSize::new(width, height);
        if !surface.is_valid() {
            return Err(ViewportError::InvalidSurface { width, height }.into());
        }

        self.cancel_animation();
        self.surface = surface;
        self.current = self.policy.constrain(&self.default_transform, surface);
        info!("Viewport initialized at {}", surface);

        self.notifier.notify(ViewportEvent::Initialized {
            surface,
            transform: self.current,
        });
        self.notify_changed();
        Ok(())
    }

    /// Stop any animation and release its frame registration.
    pub fn cleanup(&mut self) {
        self.cancel_animation();
        debug!("Viewport cleaned up");
    }

    pub fn transform(&self) -> TransformState {
        self.current
    }

    /// Where the running animation is heading, or the current transform.
    pub fn target_transform(&self) -> TransformState {
        self.driver.target().unwrap_or(self.current)
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn policy(&self) -> &ConstraintPolicy {
        &self.policy
    }

    pub fn default_transform(&self) -> TransformState {
        self.default_transform
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Frame registration the running animation is waiting on.
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.driver.pending_frame()
    }

    pub fn transform_matrix(&self) -> TransformMatrix {
        transform_matrix(&self.current)
    }

    pub fn visible_bounds(&self) -> Bounds {
        self.mapper().visible_bounds(&self.current)
    }

    pub fn is_point_visible<P: Positioned>(&self, point: &P) -> bool {
        self.mapper().is_point_visible(point, &self.current)
    }

    pub fn screen_to_canvas<P: Positioned>(&self, point: P) -> P {
        self.screen_to_canvas_with(point, &self.current)
    }

    pub fn canvas_to_screen<P: Positioned>(&self, point: P) -> P {
        self.canvas_to_screen_with(point, &self.current)
    }

    pub fn screen_to_canvas_with<P: Positioned>(&self, point: P, transform: &TransformState) -> P {
        self.mapper().screen_to_canvas(point, transform)
    }

    pub fn canvas_to_screen_with<P: Positioned>(&self, point: P, transform: &TransformState) -> P {
        self.mapper().canvas_to_screen(point, transform)
    }

    /// Preview a pinch on `base` without committing it.
    pub fn apply_pinch(
        &self,
        base: &TransformState,
        factor: f64,
        anchor: Option<Point>,
    ) -> TransformState {
        self.gestures().apply_pinch(base, factor, anchor)
    }

    /// Preview a rotation on `base` without committing it.
    pub fn apply_rotation(
        &self,
        base: &TransformState,
        delta_deg: f64,
        anchor: Option<Point>,
    ) -> TransformState {
        self.gestures().apply_rotation(base, delta_deg, anchor)
    }

    /// Run a candidate through the policy for this surface.
    pub fn constrain(&self, candidate: &TransformState) -> TransformState {
        self.policy.constrain(candidate, self.surface)
    }

    /// Merge `update` onto the base transform, constrain, then commit or animate.
    pub fn set_transform(&mut self, update: TransformUpdate, animate: bool) {
        let candidate = update.apply_to(&self.base(animate));
        self.submit(candidate, animate);
    }

    pub fn pan(&mut self, dx: f64, dy: f64, animate: bool) {
        debug!("Pan by ({}, {})", dx, dy);
        let base = self.base(animate);
        self.set_transform(TransformUpdate::translation(base.x + dx, base.y + dy), animate);
    }

    /// Set the zoom magnitude, keeping `anchor` fixed on screen.
    ///
    /// A horizontal flip survives the zoom change.
    pub fn set_zoom(&mut self, scale: f64, anchor: Option<Point>, animate: bool) {
        let base = self.base(animate);
        let signed = if base.is_flipped() {
            -scale.abs()
        } else {
            scale.abs()
        };
        let clamped = self.policy.clamp_scale(signed);
        debug!("Zoom to {:.3}", clamped);
        let candidate = self.gestures().scale_to(&base, clamped, anchor);
        self.submit(candidate, animate);
    }

    pub fn zoom_in(&mut self, animate: bool) {
        let zoom = self.base(animate).zoom();
        self.set_zoom(zoom * self.zoom_step, None, animate);
    }

    pub fn zoom_out(&mut self, animate: bool) {
        let zoom = self.base(animate).zoom();
        self.set_zoom(zoom / self.zoom_step, None, animate);
    }

    /// Turn by `delta_deg`, snapping the resulting angle.
    pub fn rotate(&mut self, delta_deg: f64, anchor: Option<Point>, animate: bool) {
        let base = self.base(animate);
        let snapped = self.policy.snap_rotation(base.rotation + delta_deg);
        // re-derive the delta so the anchor stays put after snapping
        let effective = shortest_rotation_delta(base.rotation, snapped);
        debug!("Rotate by {} (snapped to {})", delta_deg, snapped);

        let mut candidate = self.gestures().apply_rotation(&base, effective, anchor);
        candidate.rotation = snapped;
        self.submit(candidate, animate);
    }

    /// Mirror horizontally by negating the scale.
    pub fn flip_horizontal(&mut self, animate: bool) {
        let base = self.base(animate);
        self.set_transform(TransformUpdate::new().with_scale(-base.scale), animate);
    }

    /// Turn the content upside down by adding a half turn.
    pub fn flip_vertical(&mut self, animate: bool) {
        let base = self.base(animate);
        self.set_transform(
            TransformUpdate::new().with_rotation(base.rotation + 180.0),
            animate,
        );
    }

    pub fn reset_transform(&mut self, animate: bool) {
        debug!("Reset transform");
        self.set_transform(TransformUpdate::from(self.default_transform), animate);
    }

    /// Fit content of the given size onto the surface, centered and unrotated.
    ///
    /// The zoom is lowered below the fitting zoom when centering would push
    /// the translation past its bounds. If even the minimum zoom cannot be
    /// centered, the fitting zoom is kept and the translation is clamped.
    pub fn fit_to_screen(&mut self, content: SurfaceSize, animate: bool) {
        if !content.has_area() {
            warn!(
                "{}",
                ViewportError::InvalidContent {
                    width: content.width,
                    height: content.height,
                }
            );
            return;
        }

        let fitting = self.policy.clamp_scale(
            (self.surface.width / content.width).min(self.surface.height / content.height),
        );
        let focus = content.center();
        let limit = self.policy.max_centered_scale(focus, self.surface);
        let scale = if limit >= self.policy.min_scale {
            fitting.min(limit)
        } else {
            warn!(
                "{} content cannot be centered within the pan limits; placement will be clamped",
                content
            );
            fitting
        };

        let center = self.surface.center();
        let candidate = TransformState {
            x: -scale * (focus.x - center.x),
            y: -scale * (focus.y - center.y),
            scale,
            rotation: 0.0,
        };
        debug!("Fit {} content at {:.3}x", content, scale);
        self.submit(candidate, animate);
    }

    /// Fit the surface itself: unit scale, centered.
    pub fn fit_surface(&mut self, animate: bool) {
        self.fit_to_screen(self.surface, animate);
    }

    /// Deliver a frame from the scheduler.
    ///
    /// Returns true while the animation still wants frames. Frames that do
    /// not match the outstanding registration are ignored.
    pub fn on_frame(&mut self, frame: FrameRequestId) -> bool {
        match self
            .driver
            .advance(frame, &self.current, self.scheduler.as_mut())
        {
            None => {
                trace!("Ignoring {}", frame);
                self.driver.is_animating()
            }
            Some(FrameOutcome::Moved(next)) => {
                self.current = self.policy.constrain(&next, self.surface);
                trace!("Animation tick: {}", self.current);
                self.notify_changed();
                true
            }
            Some(FrameOutcome::Settled { transform, frames }) => {
                self.current = transform;
                debug!("Animation settled after {} frames", frames);
                self.notify_changed();
                self.notifier
                    .notify(ViewportEvent::AnimationSettled { frames });
                false
            }
        }
    }

    fn base(&self, animate: bool) -> TransformState {
        if animate {
            self.target_transform()
        } else {
            self.current
        }
    }

    fn submit(&mut self, candidate: TransformState, animate: bool) {
        let constrained = self.constrain(&candidate);
        if animate {
            if self
                .driver
                .animate_to(constrained, self.scheduler.as_mut())
            {
                self.notifier
                    .notify(ViewportEvent::AnimationStarted { target: constrained });
            }
        } else {
            self.cancel_animation();
            self.current = constrained;
            self.notify_changed();
        }
    }

    fn cancel_animation(&mut self) {
        if self.driver.cancel(self.scheduler.as_mut()) {
            debug!("Animation cancelled");
            self.notifier.notify(ViewportEvent::AnimationCancelled);
        }
    }

    fn notify_changed(&self) {
        self.notifier.notify(ViewportEvent::TransformChanged {
            transform: self.current,
        });
    }

    fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.surface)
    }

    fn gestures(&self) -> GestureApplier {
        GestureApplier::new(self.surface, self.policy)
    }
}

impl fmt::Display for ViewportController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Surface: {}", self.current, self.surface)
    }
}

impl fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportController")
            .field("surface", &self.surface)
            .field("current", &self.current)
            .field("policy", &self.policy)
            .field("driver", &self.driver)
            .finish()
    }
}
