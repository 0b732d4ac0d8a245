//! Service — an addressable unit of an accessory, as listed by the bridge registry.

use serde::{Deserialize, Serialize};

use crate::characteristic::{Characteristic, find_on};
use crate::id::ServiceId;

/// A registry entry: one service and its ordered characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_name: String,
    pub unique_id: ServiceId,
    #[serde(default)]
    pub service_characteristics: Vec<Characteristic>,
}

impl Service {
    #[must_use]
    pub fn new(service_name: impl Into<String>, unique_id: impl Into<ServiceId>) -> Self {
        Self {
            service_name: service_name.into(),
            unique_id: unique_id.into(),
            service_characteristics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_characteristic(mut self, characteristic: Characteristic) -> Self {
        self.service_characteristics.push(characteristic);
        self
    }

    /// First `On` characteristic of this service, if any.
    #[must_use]
    pub fn on_characteristic(&self) -> Option<&Characteristic> {
        find_on(&self.service_characteristics)
    }
}
