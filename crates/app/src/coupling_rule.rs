//! Coupling rule — mirrors the initiator's `On` state onto the receiver.
//!
//! The rule is invoked once per change event. It never fails: every
//! condition it can run into is reported through the returned
//! [`Outcome`], or through a `None` when the initiator's event carried no
//! `On` characteristic at all.

use coupling_domain::coupling::CouplingConfig;
use coupling_domain::event::Event;
use coupling_domain::outcome::{Outcome, Status};
use serde_json::Value;

use crate::ports::{CharacteristicWriter, ServiceRegistry};

/// A single initiator → receiver coupling.
pub struct CouplingRule<R, W> {
    config: CouplingConfig,
    registry: R,
    writer: W,
}

impl<R, W> CouplingRule<R, W>
where
    R: ServiceRegistry,
    W: CharacteristicWriter,
{
    #[must_use]
    pub fn new(config: CouplingConfig, registry: R, writer: W) -> Self {
        Self {
            config,
            registry,
            writer,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CouplingConfig {
        &self.config
    }

    /// Handle one change event.
    ///
    /// Returns `None` when the event comes from the initiator but has no
    /// `On` characteristic. At most one write is issued per call, and
    /// [`Outcome::action_taken`] is set exactly when it was.
    pub fn handle(&self, event: &Event) -> Option<Outcome> {
        let initiator_on = event.on_characteristic();
        let status = initiator_on.map(Status::from_characteristic);

        if event.service_name != self.config.initiator() {
            return Some(Outcome::ignored(
                event.service_name.as_str(),
                status,
                self.config.initiator(),
            ));
        }

        let initiator_on = initiator_on?;

        let Some(receiver) = self.registry.find_by_name(self.config.receiver()) else {
            return Some(Outcome::unresolved(
                event.service_name.as_str(),
                status,
                format!("could not find {}", self.config.receiver()),
            ));
        };

        let Some(receiver_on) = receiver.on_characteristic() else {
            return Some(Outcome::unresolved(
                event.service_name.as_str(),
                status,
                "could not find receiver On characteristic",
            ));
        };

        let value = initiator_on.value.clone().unwrap_or(Value::Null);
        tracing::debug!(
            receiver = %receiver.service_name,
            service_id = %receiver.unique_id,
            iid = %receiver_on.iid,
            %value,
            "mirroring initiator state"
        );
        if let Err(err) = self.writer.set(&receiver.unique_id, receiver_on.iid, value) {
            tracing::warn!(%err, receiver = %receiver.service_name, "bridge rejected mirrored write");
        }

        Some(Outcome::success(event.service_name.as_str(), status))
    }
}
