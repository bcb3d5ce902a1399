//! Error handling for ViewKit
//!
//! Interactive operations never fail: out-of-range input is clamped. The
//! error types here cover the edges of the system instead:
//! - Viewport errors (invalid surface or content dimensions)
//! - Event bus errors (publication failures)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::event_bus::EventBusError;

/// Viewport configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// Surface dimensions are negative or not finite
    #[error("Invalid surface size {width}x{height}: dimensions must be finite and non-negative")]
    InvalidSurface {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// Content dimensions cannot be fitted onto the surface
    #[error("Invalid content size {width}x{height}: dimensions must be finite and positive")]
    InvalidContent {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
}

/// Main error type for ViewKit
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Viewport error
    #[error(transparent)]
    Viewport(#[from] ViewportError),

    /// Event bus error
    #[error(transparent)]
    EventBus(#[from] EventBusError),
}

impl Error {
    /// Check if this is a viewport configuration error
    pub fn is_viewport_error(&self) -> bool {
        matches!(self, Error::Viewport(_))
    }

    /// Check if this is an event bus error
    pub fn is_event_bus_error(&self) -> bool {
        matches!(self, Error::EventBus(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
