//! Numeric defaults shared across the workspace.
//!
//! Settings fall back to these values when a config file leaves a field out.

/// Smallest allowed zoom magnitude.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed zoom magnitude.
pub const MAX_SCALE: f64 = 50.0;

/// Multiplier applied by a single zoom-in step (and divided by zoom-out).
pub const ZOOM_STEP: f64 = 1.2;

/// Rotations closer than this to a snap angle are pulled onto it (degrees).
pub const SNAP_THRESHOLD_DEG: f64 = 5.0;

/// Spacing between snap angles (degrees).
pub const SNAP_INCREMENT_DEG: f64 = 45.0;

/// Elastic margin past the surface edge, as a fraction of each dimension.
pub const OVERSCROLL_RATIO: f64 = 0.1;

/// Fraction of the remaining distance covered by each animation frame.
pub const SMOOTHING_FACTOR: f64 = 0.2;

/// Animation settles once every component delta is below this.
pub const CONVERGENCE_THRESHOLD: f64 = 0.01;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Surface width used before the host reports a real size.
pub const DEFAULT_SURFACE_WIDTH: f64 = 1200.0;

/// Surface height used before the host reports a real size.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 800.0;
