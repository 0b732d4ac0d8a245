//! # coupling-adapter-virtual
//!
//! Virtual/demo bridge that holds simulated services in memory and
//! implements the registry and write ports on top of them.
//!
//! ## Provided services
//!
//! | Service | Unique ID | Characteristics |
//! |---------|-----------|-----------------|
//! | Switch | `virtual_switch` | `Name`, `On` |
//! | Lamp | `virtual_lamp` | `Name`, `On`, `Brightness` |
//! | Thermometer | `virtual_thermometer` | `CurrentTemperature` |
//!
//! Every successful write publishes a change [`Event`] for the written
//! service, the way a real bridge notifies its automations.
//!
//! ## Dependency rule
//!
//! Depends on `coupling-app` (port traits) and `coupling-domain` only.

pub mod devices;
mod error;

use std::sync::{Mutex, MutexGuard, PoisonError};

use coupling_app::ports::{CharacteristicWriter, EventPublisher, ServiceRegistry, WriteError};
use coupling_domain::event::Event;
use coupling_domain::id::{InstanceId, ServiceId};
use coupling_domain::service::Service;
use serde_json::Value;

pub use error::VirtualError;

/// In-memory bridge with simulated services.
pub struct VirtualBridge<P> {
    services: Mutex<Vec<Service>>,
    publisher: P,
}

impl<P: EventPublisher> VirtualBridge<P> {
    /// Bridge with the default demo services.
    #[must_use]
    pub fn new(publisher: P) -> Self {
        Self::with_services(
            vec![devices::switch(), devices::lamp(), devices::thermometer()],
            publisher,
        )
    }

    #[must_use]
    pub fn with_services(services: Vec<Service>, publisher: P) -> Self {
        Self {
            services: Mutex::new(services),
            publisher,
        }
    }

    /// Simulate a user switching the named service on or off.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualError`] if the service is unknown or has no `On`
    /// characteristic.
    pub fn set_on(&self, name: &str, on: bool) -> Result<(), VirtualError> {
        let (service_id, iid) = self.on_target(name)?;
        self.set(&service_id, iid, Value::Bool(on))?;
        Ok(())
    }

    /// Flip the named service's `On` state and return the new state.
    ///
    /// # Errors
    ///
    /// Same as [`set_on`](Self::set_on).
    pub fn toggle(&self, name: &str) -> Result<bool, VirtualError> {
        let on = !self.is_on(name)?;
        self.set_on(name, on)?;
        Ok(on)
    }

    /// Current `On` state of the named service.
    ///
    /// # Errors
    ///
    /// Same as [`set_on`](Self::set_on).
    pub fn is_on(&self, name: &str) -> Result<bool, VirtualError> {
        let services = self.lock();
        let service = find_named(&services, name)?;
        service
            .on_characteristic()
            .map(coupling_domain::characteristic::Characteristic::is_truthy)
            .ok_or_else(|| VirtualError::NoOnCharacteristic(name.to_string()))
    }

    fn on_target(&self, name: &str) -> Result<(ServiceId, InstanceId), VirtualError> {
        let services = self.lock();
        let service = find_named(&services, name)?;
        let on = service
            .on_characteristic()
            .ok_or_else(|| VirtualError::NoOnCharacteristic(name.to_string()))?;
        Ok((service.unique_id.clone(), on.iid))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Service>> {
        self.services.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_named<'a>(services: &'a [Service], name: &str) -> Result<&'a Service, VirtualError> {
    services
        .iter()
        .find(|s| s.service_name == name)
        .ok_or_else(|| VirtualError::UnknownService(name.to_string()))
}

impl<P: EventPublisher> ServiceRegistry for VirtualBridge<P> {
    fn services(&self) -> Vec<Service> {
        self.lock().clone()
    }
}

impl<P: EventPublisher> CharacteristicWriter for VirtualBridge<P> {
    fn set(&self, service: &ServiceId, iid: InstanceId, value: Value) -> Result<(), WriteError> {
        let event = {
            let mut services = self.lock();
            let target = services
                .iter_mut()
                .find(|s| &s.unique_id == service)
                .ok_or_else(|| WriteError::UnknownService(service.clone()))?;
            let characteristic = target
                .service_characteristics
                .iter_mut()
                .find(|c| c.iid == iid)
                .ok_or_else(|| WriteError::UnknownCharacteristic {
                    service: service.clone(),
                    iid,
                })?;
            characteristic.value = Some(value);
            Event::new(
                target.service_name.as_str(),
                target.service_characteristics.clone(),
            )
        };

        tracing::debug!(service = %event.service_name, %iid, "virtual characteristic written");
        self.publisher.publish(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupling_domain::characteristic::Characteristic;
    use serde_json::json;

    #[derive(Default)]
    struct SpyPublisher {
        events: Mutex<Vec<Event>>,
    }

    impl EventPublisher for SpyPublisher {
        fn publish(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn bridge() -> VirtualBridge<SpyPublisher> {
        VirtualBridge::new(SpyPublisher::default())
    }

    #[test]
    fn should_list_three_demo_services() {
        let names: Vec<_> = bridge()
            .services()
            .into_iter()
            .map(|s| s.service_name)
            .collect();
        assert_eq!(names, vec!["Switch", "Lamp", "Thermometer"]);
    }

    #[test]
    fn should_find_service_by_name() {
        let lamp = bridge().find_by_name("Lamp").unwrap();
        assert_eq!(lamp.unique_id, ServiceId::new("virtual_lamp"));
        assert!(bridge().find_by_name("Garage").is_none());
    }

    #[test]
    fn should_update_value_and_publish_change_on_write() {
        let bridge = bridge();

        bridge
            .set(
                &ServiceId::new("virtual_lamp"),
                InstanceId::new(devices::ON_IID),
                json!(true),
            )
            .unwrap();

        assert!(bridge.is_on("Lamp").unwrap());
        let events = bridge.publisher.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].service_name, "Lamp");
        assert!(events[0].on_characteristic().unwrap().is_truthy());
    }

    #[test]
    fn should_reject_write_to_unknown_service() {
        let err = bridge()
            .set(&ServiceId::new("nope"), InstanceId::new(1), json!(true))
            .unwrap_err();
        assert_eq!(err, WriteError::UnknownService(ServiceId::new("nope")));
    }

    #[test]
    fn should_reject_write_to_unknown_characteristic() {
        let bridge = bridge();
        let err = bridge
            .set(&ServiceId::new("virtual_switch"), InstanceId::new(99), json!(true))
            .unwrap_err();
        assert!(matches!(err, WriteError::UnknownCharacteristic { iid, .. } if iid.get() == 99));
        assert!(bridge.publisher.events.lock().unwrap().is_empty());
    }

    #[test]
    fn should_toggle_switch() {
        let bridge = bridge();
        assert!(bridge.toggle("Switch").unwrap());
        assert!(bridge.is_on("Switch").unwrap());
        assert!(!bridge.toggle("Switch").unwrap());
        assert_eq!(bridge.publisher.events.lock().unwrap().len(), 2);
    }

    #[test]
    fn should_refuse_to_switch_service_without_on() {
        let err = bridge().set_on("Thermometer", true).unwrap_err();
        assert!(matches!(err, VirtualError::NoOnCharacteristic(name) if name == "Thermometer"));
    }

    #[test]
    fn should_refuse_to_switch_unknown_service() {
        let err = bridge().toggle("Garage").unwrap_err();
        assert!(matches!(err, VirtualError::UnknownService(_)));
    }

    #[test]
    fn should_hold_custom_services() {
        let bridge = VirtualBridge::with_services(
            vec![Service::new("Fan", "f1").with_characteristic(Characteristic::on(3))],
            SpyPublisher::default(),
        );
        bridge.set_on("Fan", true).unwrap();
        assert!(bridge.is_on("Fan").unwrap());
    }
}
