//! # ViewKit Viewport
//!
//! Pan, zoom and rotation for a 2D drawing surface.
//!
//! [`ViewportController`] owns the committed [`TransformState`] and funnels
//! every operation through the same pipeline: build a candidate, clamp it
//! with [`ConstraintPolicy`], then commit it immediately or hand it to the
//! [`AnimationDriver`]. Every commit is announced through a
//! [`ChangeNotifier`].
//!
//! ```
//! use viewkit_settings::Config;
//! use viewkit_viewport::{ManualFrameScheduler, NullNotifier, ViewportController};
//!
//! let frames = ManualFrameScheduler::new();
//! let mut viewport = ViewportController::new(&Config::default(), frames.clone(), NullNotifier);
//! viewport.initialize(1000.0, 800.0).unwrap();
//!
//! viewport.zoom_in(true);
//! while viewport.is_animating() {
//!     for frame in frames.take_due() {
//!         viewport.on_frame(frame);
//!     }
//! }
//! assert!((viewport.transform().scale - 1.2).abs() < 1e-12);
//! ```
//!
//! [`TransformState`]: viewkit_core::TransformState

pub mod animation;
pub mod constraints;
pub mod controller;
pub mod gesture;
pub mod mapper;
pub mod notifier;
pub mod scheduler;
pub mod update;

pub use animation::{smooth_step, AnimationDriver, AnimationPhase, FrameOutcome, SmoothingStep};
pub use constraints::{normalize_rotation, shortest_rotation_delta, ConstraintPolicy};
pub use controller::ViewportController;
pub use gesture::{apply_pinch, apply_rotation, GestureApplier};
pub use mapper::{transform_matrix, CoordinateMapper, TransformMatrix};
pub use notifier::{ChangeNotifier, NullNotifier};
pub use scheduler::{FrameRequestId, FrameScheduler, ManualFrameScheduler};
pub use update::TransformUpdate;
