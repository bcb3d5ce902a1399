//! Partial transform updates.

use viewkit_core::TransformState;

/// A set of transform fields to overwrite; absent fields keep the base value.
///
/// Updates never mutate a transform in place: [`TransformUpdate::apply_to`]
/// always produces a fresh value that still has to pass through the
/// constraint policy before it is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
}

impl TransformUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite both translation components.
    pub fn translation(x: f64, y: f64) -> Self {
        Self::new().with_x(x).with_y(y)
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.scale.is_none() && self.rotation.is_none()
    }

    /// Merge the present fields onto a copy of `base`.
    pub fn apply_to(&self, base: &TransformState) -> TransformState {
        TransformState {
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            scale: self.scale.unwrap_or(base.scale),
            rotation: self.rotation.unwrap_or(base.rotation),
        }
    }
}

impl From<TransformState> for TransformUpdate {
    fn from(t: TransformState) -> Self {
        Self {
            x: Some(t.x),
            y: Some(t.y),
            scale: Some(t.scale),
            rotation: Some(t.rotation),
        }
    }
}
