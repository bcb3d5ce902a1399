//! Clamping rules applied to every candidate transform before it is committed.
//!
//! The policy is a plain value built from [`ViewportSettings`]; every method
//! is pure and returns a new transform.

use viewkit_core::constants::{
    FULL_TURN_DEG, MAX_SCALE, MIN_SCALE, OVERSCROLL_RATIO, SNAP_INCREMENT_DEG, SNAP_THRESHOLD_DEG,
};
use viewkit_core::{Bounds, Point, SurfaceSize, TransformState};
use viewkit_settings::ViewportSettings;

/// Fold an angle in degrees into `[0, 360)`.
pub fn normalize_rotation(rotation: f64) -> f64 {
    let folded = rotation.rem_euclid(FULL_TURN_DEG);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if folded >= FULL_TURN_DEG {
        0.0
    } else {
        folded
    }
}

/// Signed shortest turn from `from` to `to`, in `[-180, 180)`.
pub fn shortest_rotation_delta(from: f64, to: f64) -> f64 {
    let half = FULL_TURN_DEG / 2.0;
    (to - from + half).rem_euclid(FULL_TURN_DEG) - half
}

/// Scale, rotation and translation limits for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintPolicy {
    pub min_scale: f64,
    pub max_scale: f64,
    pub snap_threshold_deg: f64,
    pub snap_increment_deg: f64,
    pub overscroll_ratio: f64,
}

impl Default for ConstraintPolicy {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            snap_threshold_deg: SNAP_THRESHOLD_DEG,
            snap_increment_deg: SNAP_INCREMENT_DEG,
            overscroll_ratio: OVERSCROLL_RATIO,
        }
    }
}

impl From<&ViewportSettings> for ConstraintPolicy {
    fn from(settings: &ViewportSettings) -> Self {
        Self {
            min_scale: settings.min_scale,
            max_scale: settings.max_scale,
            snap_threshold_deg: settings.snap_threshold_deg,
            snap_increment_deg: settings.snap_increment_deg,
            overscroll_ratio: settings.overscroll_ratio,
        }
    }
}

impl ConstraintPolicy {
    /// Clamp the zoom magnitude into `[min_scale, max_scale]`, keeping the flip.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let magnitude = scale.abs().max(self.min_scale).min(self.max_scale);
        if scale < 0.0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Same as [`normalize_rotation`].
    pub fn normalize_rotation(&self, rotation: f64) -> f64 {
        normalize_rotation(rotation)
    }

    /// Pull an angle onto the nearest snap angle when it is close enough.
    ///
    /// Snap angles are checked from 0° upwards and the first one closer than
    /// the threshold wins. Distance is measured around the circle, so 358°
    /// snaps to 0°.
    pub fn snap_rotation(&self, rotation: f64) -> f64 {
        let rotation = normalize_rotation(rotation);
        if self.snap_increment_deg <= 0.0 || self.snap_threshold_deg <= 0.0 {
            return rotation;
        }

        let steps = (FULL_TURN_DEG / self.snap_increment_deg).round() as usize;
        (0..steps)
            .map(|step| step as f64 * self.snap_increment_deg)
            .find(|angle| shortest_rotation_delta(rotation, *angle).abs() < self.snap_threshold_deg)
            .unwrap_or(rotation)
    }

    /// Clamp the translation so the rotated, scaled surface stays reachable.
    ///
    /// Scale and rotation of `candidate` are used as given.
    pub fn bounded_translation(
        &self,
        candidate: &TransformState,
        surface: SurfaceSize,
    ) -> TransformState {
        let extent = scaled_surface_bounds(candidate, surface);
        let overscroll_x = surface.width * self.overscroll_ratio;
        let overscroll_y = surface.height * self.overscroll_ratio;

        // max/min rather than clamp so NaN input cannot panic
        let x = candidate
            .x
            .max(-extent.width() - overscroll_x)
            .min(surface.width + overscroll_x);
        let y = candidate
            .y
            .max(-extent.height() - overscroll_y)
            .min(surface.height + overscroll_y);

        TransformState { x, y, ..*candidate }
    }

    /// Apply scale, rotation and translation limits in that order.
    pub fn constrain(&self, candidate: &TransformState, surface: SurfaceSize) -> TransformState {
        let shaped = TransformState {
            scale: self.clamp_scale(candidate.scale),
            rotation: normalize_rotation(candidate.rotation),
            ..*candidate
        };
        self.bounded_translation(&shaped, surface)
    }

    /// Largest zoom at which `focus` can sit on the surface center, unrotated,
    /// without the translation leaving its bounds.
    ///
    /// Infinite when every zoom works; below `min_scale` when none does.
    pub fn max_centered_scale(&self, focus: Point, surface: SurfaceSize) -> f64 {
        let center = surface.center();
        let axis_limit = |offset: f64, length: f64| {
            let overscroll = length * self.overscroll_ratio;
            let mut limit = f64::INFINITY;
            // translation is scale * offset; upper bound is length + overscroll
            if offset > 0.0 {
                limit = limit.min((length + overscroll) / offset);
            }
            // lower bound is -scale * length - overscroll
            if offset + length < 0.0 {
                limit = limit.min(overscroll / -(offset + length));
            }
            limit
        };
        axis_limit(center.x - focus.x, surface.width)
            .min(axis_limit(center.y - focus.y, surface.height))
    }

    /// Whether `transform` already satisfies every limit.
    pub fn admits(&self, transform: &TransformState, surface: SurfaceSize) -> bool {
        self.constrain(transform, surface) == *transform
    }
}

/// Axis-aligned box of the surface corners rotated and scaled about its center.
fn scaled_surface_bounds(transform: &TransformState, surface: SurfaceSize) -> Bounds {
    let center = surface.center();
    let (sin, cos) = transform.rotation_radians().sin_cos();
    let corners = surface.corners().map(|corner| {
        let dx = (corner.x - center.x) * transform.scale;
        let dy = (corner.y - center.y) * transform.scale;
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    });
    Bounds::from_points(corners).unwrap_or_else(|| surface.rect())
}
