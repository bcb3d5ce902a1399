//! Conversion between screen pixels and content coordinates.
//!
//! Scaling and rotation pivot around the surface center; the transform's
//! translation is applied on top in screen space:
//!
//! ```text
//! screen = center + (x, y) + scale * R(rotation) * (canvas - center)
//! canvas = center + R(-rotation) * (screen - center - (x, y)) / scale
//! ```
//!
//! A zero scale makes the inverse undefined; the constraint policy never
//! commits one.

use viewkit_core::{Bounds, Point, Positioned, SurfaceSize, TransformState};

/// Row-major 3x3 affine matrix handed to the rendering backend.
pub type TransformMatrix = [[f64; 3]; 3];

/// Build the render matrix for a transform.
pub fn transform_matrix(transform: &TransformState) -> TransformMatrix {
    let (sin, cos) = transform.rotation_radians().sin_cos();
    let s = transform.scale;
    [
        [s * cos, s * sin, transform.x],
        [-s * sin, s * cos, transform.y],
        [0.0, 0.0, 1.0],
    ]
}

/// Stateless point conversion for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    surface: SurfaceSize,
}

impl CoordinateMapper {
    pub fn new(surface: SurfaceSize) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Map a screen position into content space.
    ///
    /// Only the position changes; pressure, timestamps and any other
    /// attributes of `point` are carried over.
    pub fn screen_to_canvas<P: Positioned>(&self, point: P, transform: &TransformState) -> P {
        let center = self.surface.center();
        let p = point.position();
        let dx = (p.x - center.x - transform.x) / transform.scale;
        let dy = (p.y - center.y - transform.y) / transform.scale;
        let (sin, cos) = transform.rotation_radians().sin_cos();
        point.with_position(Point::new(
            center.x + dx * cos + dy * sin,
            center.y - dx * sin + dy * cos,
        ))
    }

    /// Map a content position onto the screen. Inverse of [`Self::screen_to_canvas`].
    pub fn canvas_to_screen<P: Positioned>(&self, point: P, transform: &TransformState) -> P {
        let center = self.surface.center();
        let p = point.position();
        let dx = p.x - center.x;
        let dy = p.y - center.y;
        let (sin, cos) = transform.rotation_radians().sin_cos();
        let s = transform.scale;
        point.with_position(Point::new(
            center.x + transform.x + s * (dx * cos - dy * sin),
            center.y + transform.y + s * (dx * sin + dy * cos),
        ))
    }

    /// Content-space box covering everything currently on screen.
    pub fn visible_bounds(&self, transform: &TransformState) -> Bounds {
        let corners = self
            .surface
            .corners()
            .map(|corner| self.screen_to_canvas(corner, transform));
        Bounds::from_points(corners).unwrap_or_else(|| self.surface.rect())
    }

    /// Whether a content point lands on the surface, edges included.
    pub fn is_point_visible<P: Positioned>(&self, point: &P, transform: &TransformState) -> bool {
        let screen = self.canvas_to_screen(point.position(), transform);
        self.surface.rect().contains(screen)
    }
}
