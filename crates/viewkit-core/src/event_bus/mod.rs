//! # Event Bus Module
//!
//! Publish/subscribe hub used to broadcast committed transforms and
//! settings changes to the rest of the application.
//!
//! ## Usage
//!
//! ```rust
//! use viewkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, ViewportEvent};
//! use viewkit_core::TransformState;
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Viewport]),
//!     |event| {
//!         if let Some(transform) = event.transform() {
//!             println!("now at {}", transform);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Viewport(ViewportEvent::TransformChanged {
//!     transform: TransformState::IDENTITY,
//! }))
//! .ok();
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
