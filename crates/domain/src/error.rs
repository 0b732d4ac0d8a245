//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors; the domain only knows about
//! invariant violations.

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("initiator service name must not be empty")]
    EmptyInitiator,
    #[error("receiver service name must not be empty")]
    EmptyReceiver,
    #[error("service {0:?} cannot be coupled to itself")]
    SelfCoupling(String),
}
