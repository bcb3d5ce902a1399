//! Value types shared by every ViewKit crate.

pub mod geometry;
pub mod transform;

pub use geometry::{Bounds, Point, Positioned, StrokePoint, SurfaceSize};
pub use transform::TransformState;
