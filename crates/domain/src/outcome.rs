//! Outcome — what one run of the coupling rule observed and did.

use serde::{Deserialize, Serialize};

use crate::characteristic::Characteristic;

/// Power status read from the initiator's `On` characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "turned on")]
    TurnedOn,
    #[serde(rename = "turned off")]
    TurnedOff,
}

impl Status {
    /// Derive the status from an `On` characteristic's value.
    #[must_use]
    pub fn from_characteristic(characteristic: &Characteristic) -> Self {
        if characteristic.is_truthy() {
            Self::TurnedOn
        } else {
            Self::TurnedOff
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnedOn => f.write_str("turned on"),
            Self::TurnedOff => f.write_str("turned off"),
        }
    }
}

/// The result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub service_name: String,
    pub status: Option<Status>,
    pub action_taken: bool,
    pub message: String,
}

impl Outcome {
    /// Message reported when a write was issued.
    pub const SUCCESS: &'static str = "success";

    /// No action: the event did not come from the initiator.
    #[must_use]
    pub fn ignored(service_name: impl Into<String>, status: Option<Status>, initiator: &str) -> Self {
        Self {
            service_name: service_name.into(),
            status,
            action_taken: false,
            message: format!("event not for {initiator}"),
        }
    }

    /// No action: the receiver side could not be resolved.
    #[must_use]
    pub fn unresolved(
        service_name: impl Into<String>,
        status: Option<Status>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            status,
            action_taken: false,
            message: message.into(),
        }
    }

    /// One write was issued to the receiver.
    #[must_use]
    pub fn success(service_name: impl Into<String>, status: Option<Status>) -> Self {
        Self {
            service_name: service_name.into(),
            status,
            action_taken: true,
            message: Self::SUCCESS.to_string(),
        }
    }
}
