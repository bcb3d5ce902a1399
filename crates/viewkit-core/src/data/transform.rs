//! The affine view transform value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pan, zoom and rotation mapping content space onto the screen.
///
/// `x`/`y` are a screen-pixel offset, `scale` is a signed zoom factor whose
/// sign encodes a horizontal flip, and `rotation` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    /// Horizontal offset in screen pixels.
    pub x: f64,
    /// Vertical offset in screen pixels.
    pub y: f64,
    /// Signed zoom factor; negative means mirrored horizontally.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl TransformState {
    /// No offset, unit scale, no rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Creates a transform from its four components.
    pub fn new(x: f64, y: f64, scale: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            scale,
            rotation,
        }
    }

    /// Returns the translation as an `(x, y)` pair.
    pub fn translation(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Zoom magnitude regardless of flip.
    pub fn zoom(&self) -> f64 {
        self.scale.abs()
    }

    /// Whether the content is mirrored horizontally.
    pub fn is_flipped(&self) -> bool {
        self.scale.is_sign_negative()
    }

    /// Rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation.to_radians()
    }

    /// Component-wise comparison within `epsilon`.
    ///
    /// Rotation is compared on the circle, so `359.999` and `0.0` match.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let turn = (self.rotation - other.rotation).rem_euclid(360.0);
        let rotation_gap = turn.min(360.0 - turn);
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
            && rotation_gap <= epsilon
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for TransformState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Rotation: {:.1}° | Offset: ({:.1}, {:.1})",
            self.scale, self.rotation, self.x, self.y
        )
    }
}
