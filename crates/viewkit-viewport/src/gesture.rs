//! Anchored pinch and rotation gestures.
//!
//! Each function returns a fresh candidate; callers decide whether to
//! constrain and commit it or just preview it. The anchor is a screen point
//! that stays fixed on screen while the gesture applies. Without an anchor
//! the gesture pivots about the projected surface center and the
//! translation is left alone.

use viewkit_core::{Point, SurfaceSize, TransformState};

use crate::constraints::{normalize_rotation, ConstraintPolicy};

/// Gesture math for one surface and policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureApplier {
    surface: SurfaceSize,
    policy: ConstraintPolicy,
}

impl GestureApplier {
    pub fn new(surface: SurfaceSize, policy: ConstraintPolicy) -> Self {
        Self { surface, policy }
    }

    /// Multiply the scale by `factor` (clamped), keeping `anchor` in place.
    pub fn apply_pinch(
        &self,
        base: &TransformState,
        factor: f64,
        anchor: Option<Point>,
    ) -> TransformState {
        let scale = self.policy.clamp_scale(base.scale * factor);
        self.scale_to(base, scale, anchor)
    }

    /// Switch to an absolute `scale`, keeping `anchor` in place.
    ///
    /// `scale` is used as given; clamp it first if it came from user input.
    pub fn scale_to(
        &self,
        base: &TransformState,
        scale: f64,
        anchor: Option<Point>,
    ) -> TransformState {
        if base.scale == 0.0 {
            return TransformState { scale, ..*base };
        }

        let ratio = scale / base.scale;
        let (cx, cy) = self.anchor_offset(base, anchor);
        TransformState {
            x: base.x - cx * (ratio - 1.0),
            y: base.y - cy * (ratio - 1.0),
            scale,
            rotation: base.rotation,
        }
    }

    /// Turn by `delta_deg`, keeping `anchor` in place.
    pub fn apply_rotation(
        &self,
        base: &TransformState,
        delta_deg: f64,
        anchor: Option<Point>,
    ) -> TransformState {
        let (cx, cy) = self.anchor_offset(base, anchor);
        let (sin, cos) = delta_deg.to_radians().sin_cos();
        TransformState {
            x: base.x + cx - cx * cos + cy * sin,
            y: base.y + cy - cx * sin - cy * cos,
            scale: base.scale,
            rotation: normalize_rotation(base.rotation + delta_deg),
        }
    }

    /// Offset of the anchor from the projected surface center.
    fn anchor_offset(&self, base: &TransformState, anchor: Option<Point>) -> (f64, f64) {
        match anchor {
            Some(anchor) => {
                let center = self.surface.center();
                (anchor.x - center.x - base.x, anchor.y - center.y - base.y)
            }
            None => (0.0, 0.0),
        }
    }
}

/// Pinch with the default policy.
pub fn apply_pinch(
    base: &TransformState,
    factor: f64,
    anchor: Option<Point>,
    surface: SurfaceSize,
) -> TransformState {
    GestureApplier::new(surface, ConstraintPolicy::default()).apply_pinch(base, factor, anchor)
}

/// Rotation about an anchor; the policy plays no part in it.
pub fn apply_rotation(
    base: &TransformState,
    delta_deg: f64,
    anchor: Option<Point>,
    surface: SurfaceSize,
) -> TransformState {
    GestureApplier::new(surface, ConstraintPolicy::default()).apply_rotation(base, delta_deg, anchor)
}
