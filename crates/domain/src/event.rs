//! Event — a characteristic-change notification for one accessory service.
//!
//! Events are delivered by the bridge whenever any characteristic of a
//! service changes. They carry the full characteristic list of the service
//! as it stands after the change.

use serde::{Deserialize, Serialize};

use crate::characteristic::{Characteristic, find_on};

/// A change notification for one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub service_name: String,
    #[serde(default)]
    pub service_characteristics: Vec<Characteristic>,
}

impl Event {
    #[must_use]
    pub fn new(service_name: impl Into<String>, service_characteristics: Vec<Characteristic>) -> Self {
        Self {
            service_name: service_name.into(),
            service_characteristics,
        }
    }

    /// First `On` characteristic carried by this event, if any.
    #[must_use]
    pub fn on_characteristic(&self) -> Option<&Characteristic> {
        find_on(&self.service_characteristics)
    }
}
