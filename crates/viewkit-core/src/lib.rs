//! # ViewKit Core
//!
//! Shared types for the ViewKit workspace: the transform value type and
//! geometry primitives, numeric defaults, error types, and the event bus
//! that broadcasts committed transforms.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{Bounds, Point, Positioned, StrokePoint, SurfaceSize, TransformState};

pub use error::{Error, Result, ViewportError};

pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, SettingsEvent,
    SubscriptionId, ViewportEvent,
};
