//! Event bus port — publication of characteristic-change events.

use coupling_domain::event::Event;

/// Publishes change events to interested subscribers.
///
/// Publication is fire-and-forget: an event nobody listens to is dropped.
pub trait EventPublisher {
    fn publish(&self, event: Event);
}

impl<T: EventPublisher + ?Sized> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) {
        (**self).publish(event);
    }
}
