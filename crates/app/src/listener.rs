//! Listener — feeds bus events to the coupling rule, one at a time.

use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use coupling_domain::event::Event;

use crate::coupling_rule::CouplingRule;
use crate::ports::{CharacteristicWriter, ServiceRegistry};

/// Counters collected while listening.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenReport {
    /// Events handed to the rule.
    pub events: u64,
    /// Outcomes with a write issued.
    pub actions: u64,
    /// Outcomes without a write.
    pub ignored: u64,
    /// Initiator events carrying no `On` characteristic.
    pub silent: u64,
    /// Events dropped because the listener fell behind.
    pub lagged: u64,
}

/// Run `rule` against every event received until the bus closes.
pub async fn listen<R, W>(rule: &CouplingRule<R, W>, receiver: broadcast::Receiver<Event>) -> ListenReport
where
    R: ServiceRegistry,
    W: CharacteristicWriter,
{
    let mut report = ListenReport::default();
    let mut stream = BroadcastStream::new(receiver);

    while let Some(item) = stream.next().await {
        let event = match item {
            Ok(event) => event,
            Err(BroadcastStreamRecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "coupling listener lagged, events dropped");
                report.lagged += n;
                continue;
            }
        };

        report.events += 1;
        match rule.handle(&event) {
            Some(outcome) if outcome.action_taken => {
                report.actions += 1;
                tracing::info!(
                    service = %outcome.service_name,
                    status = ?outcome.status,
                    receiver = %rule.config().receiver(),
                    "{}",
                    outcome.message
                );
            }
            Some(outcome) => {
                report.ignored += 1;
                tracing::debug!(
                    service = %outcome.service_name,
                    status = ?outcome.status,
                    "{}",
                    outcome.message
                );
            }
            None => {
                report.silent += 1;
                tracing::debug!(service = %event.service_name, "initiator event without On characteristic");
            }
        }
    }

    tracing::debug!(?report, "coupling listener stopped");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupling_domain::characteristic::Characteristic;
    use coupling_domain::coupling::CouplingConfig;
    use coupling_domain::id::{InstanceId, ServiceId};
    use coupling_domain::service::Service;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    use crate::event_bus::InProcessEventBus;
    use crate::ports::{EventPublisher, WriteError};

    struct FixedRegistry(Vec<Service>);

    impl ServiceRegistry for FixedRegistry {
        fn services(&self) -> Vec<Service> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct CountingWriter {
        writes: Mutex<Vec<Value>>,
    }

    impl CharacteristicWriter for CountingWriter {
        fn set(&self, _service: &ServiceId, _iid: InstanceId, value: Value) -> Result<(), WriteError> {
            self.writes.lock().unwrap().push(value);
            Ok(())
        }
    }

    fn rule(writer: Arc<CountingWriter>) -> CouplingRule<FixedRegistry, Arc<CountingWriter>> {
        CouplingRule::new(
            CouplingConfig::new("Switch", "Lamp").unwrap(),
            FixedRegistry(vec![
                Service::new("Lamp", "abc").with_characteristic(Characteristic::on(9)),
            ]),
            writer,
        )
    }

    #[tokio::test]
    async fn should_handle_every_event_until_bus_closes() {
        let writer = Arc::new(CountingWriter::default());
        let rule = rule(Arc::clone(&writer));
        let bus = InProcessEventBus::new(16);
        let rx = bus.subscribe();

        bus.publish(Event::new("Switch", vec![Characteristic::on(5).with_value(true)]));
        bus.publish(Event::new("Lamp", vec![Characteristic::on(9).with_value(true)]));
        bus.publish(Event::new("Switch", vec![Characteristic::new("Name", 1)]));
        bus.publish(Event::new("Switch", vec![Characteristic::on(5).with_value(false)]));
        drop(bus);

        let report = listen(&rule, rx).await;

        assert_eq!(
            report,
            ListenReport {
                events: 4,
                actions: 2,
                ignored: 1,
                silent: 1,
                lagged: 0,
            }
        );
        assert_eq!(
            *writer.writes.lock().unwrap(),
            vec![json!(true), json!(false)]
        );
    }

    #[tokio::test]
    async fn should_count_lagged_events() {
        let rule = rule(Arc::default());
        let bus = InProcessEventBus::new(2);
        let rx = bus.subscribe();

        for _ in 0..5 {
            bus.publish(Event::new("Switch", vec![Characteristic::on(5).with_value(true)]));
        }
        drop(bus);

        let report = listen(&rule, rx).await;

        assert_eq!(report.lagged, 3);
        assert_eq!(report.events, 2);
        assert_eq!(report.actions, 2);
    }
}
