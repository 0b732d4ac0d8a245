//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use coupling_domain::event::Event;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped). Subscribers see the bus as closed once
/// the bus itself is dropped.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) {
        // broadcast::send fails only when there are zero receivers.
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupling_domain::characteristic::Characteristic;

    fn switch_event() -> Event {
        Event::new("Switch", vec![Characteristic::on(5).with_value(true)])
    }

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(switch_event());

        let received = rx.recv().await.unwrap();
        assert_eq!(received, switch_event());
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(switch_event());

        assert_eq!(rx1.recv().await.unwrap().service_name, "Switch");
        assert_eq!(rx2.recv().await.unwrap().service_name, "Switch");
    }

    #[test]
    fn should_not_panic_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        bus.publish(switch_event());
    }

    #[tokio::test]
    async fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);
        bus.publish(Event::new("Early", Vec::new()));

        let mut rx = bus.subscribe();
        bus.publish(switch_event());

        let received = rx.recv().await.unwrap();
        assert_eq!(received.service_name, "Switch");
    }

    #[tokio::test]
    async fn should_close_subscribers_when_bus_is_dropped() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();
        drop(bus);

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
