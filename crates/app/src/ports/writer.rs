//! Writer port — the bridge's characteristic write primitive.

use coupling_domain::id::{InstanceId, ServiceId};
use serde_json::Value;

/// Failures reported by the bridge when a write cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    #[error("unknown service {0}")]
    UnknownService(ServiceId),
    #[error("service {service} has no characteristic {iid}")]
    UnknownCharacteristic { service: ServiceId, iid: InstanceId },
}

/// Sets one characteristic of one service, `set(serviceId, characteristicId, value)`.
pub trait CharacteristicWriter {
    /// # Errors
    ///
    /// Returns a [`WriteError`] when the target does not exist on the bridge.
    fn set(&self, service: &ServiceId, iid: InstanceId, value: Value) -> Result<(), WriteError>;
}

impl<T: CharacteristicWriter + ?Sized> CharacteristicWriter for std::sync::Arc<T> {
    fn set(&self, service: &ServiceId, iid: InstanceId, value: Value) -> Result<(), WriteError> {
        (**self).set(service, iid, value)
    }
}
