//! Coupling — which service drives which.
//!
//! A [`CouplingConfig`] can only exist in a valid state: both names are
//! non-blank and they differ. An empty initiator would match unnamed
//! services and an empty receiver would resolve to an arbitrary unnamed
//! registry entry.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Validated initiator → receiver pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCoupling")]
pub struct CouplingConfig {
    initiator: String,
    receiver: String,
}

#[derive(Deserialize)]
struct RawCoupling {
    initiator: String,
    receiver: String,
}

impl TryFrom<RawCoupling> for CouplingConfig {
    type Error = ValidationError;

    fn try_from(raw: RawCoupling) -> Result<Self, Self::Error> {
        Self::new(raw.initiator, raw.receiver)
    }
}

impl CouplingConfig {
    /// # Errors
    ///
    /// - [`ValidationError::EmptyInitiator`] / [`ValidationError::EmptyReceiver`]
    ///   when a name is empty or only whitespace
    /// - [`ValidationError::SelfCoupling`] when both names are equal
    pub fn new(
        initiator: impl Into<String>,
        receiver: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let initiator = initiator.into();
        let receiver = receiver.into();
        if initiator.trim().is_empty() {
            return Err(ValidationError::EmptyInitiator);
        }
        if receiver.trim().is_empty() {
            return Err(ValidationError::EmptyReceiver);
        }
        if initiator == receiver {
            return Err(ValidationError::SelfCoupling(initiator));
        }
        Ok(Self {
            initiator,
            receiver,
        })
    }

    /// Name of the service whose `On` state is mirrored.
    #[must_use]
    pub fn initiator(&self) -> &str {
        &self.initiator
    }

    /// Name of the service that receives the mirrored state.
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }
}
