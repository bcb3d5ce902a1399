//! Outbound change notifications.

use std::sync::Arc;

use tracing::trace;
use viewkit_core::{AppEvent, EventBus, EventBusError, ViewportEvent};

/// Receives every viewport event the controller emits.
///
/// Notification is fire-and-forget: implementations must not fail the
/// operation that triggered them.
pub trait ChangeNotifier {
    fn notify(&self, event: ViewportEvent);
}

impl ChangeNotifier for EventBus {
    fn notify(&self, event: ViewportEvent) {
        match self.publish(AppEvent::Viewport(event)) {
            Ok(_) => {}
            Err(EventBusError::NoSubscribers) => {
                trace!("Viewport event dropped: no subscribers");
            }
        }
    }
}

impl<N: ChangeNotifier + ?Sized> ChangeNotifier for Arc<N> {
    fn notify(&self, event: ViewportEvent) {
        (**self).notify(event)
    }
}

impl<N: ChangeNotifier + ?Sized> ChangeNotifier for Box<N> {
    fn notify(&self, event: ViewportEvent) {
        (**self).notify(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl ChangeNotifier for NullNotifier {
    fn notify(&self, _event: ViewportEvent) {}
}
