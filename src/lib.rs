//! # ViewKit
//!
//! Viewport transform controller for 2D drawing surfaces: pan, zoom and
//! rotation with clamped bounds, elastic overscroll, angle snapping,
//! anchored pinch and rotation gestures, and smoothed animation.
//!
//! ## Architecture
//!
//! ViewKit is organized as a workspace with multiple crates:
//!
//! 1. **viewkit-core** - Transform and geometry types, constants, errors, event bus
//! 2. **viewkit-settings** - Configuration loading, validation and persistence
//! 3. **viewkit-viewport** - Constraint policy, coordinate mapping, gestures,
//!    animation and the controller
//! 4. **viewkit** - This facade plus a headless demo binary

pub use viewkit_core::{
    AppEvent, Bounds, Error, EventBus, EventBusConfig, EventCategory, EventFilter, Point,
    Positioned, Result, SettingsEvent, StrokePoint, SurfaceSize, TransformState, ViewportError,
    ViewportEvent,
};

pub use viewkit_settings::{
    AnimationSettings, Config, ConfigError, EventSettings, SettingsError, ViewportSettings,
};

pub use viewkit_viewport::{
    ChangeNotifier, ConstraintPolicy, CoordinateMapper, FrameRequestId, FrameScheduler,
    GestureApplier, ManualFrameScheduler, NullNotifier, TransformMatrix, TransformUpdate,
    ViewportController,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log output format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "VIEWKIT_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output, pretty by default or JSON when `VIEWKIT_LOG_FORMAT=json`
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
