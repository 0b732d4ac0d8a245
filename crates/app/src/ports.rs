//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the bridge.
//! They are defined here (in `app`) so that both the rule and the adapter
//! layer can depend on them without creating circular dependencies.

pub mod event_bus;
pub mod registry;
pub mod writer;

pub use event_bus::EventPublisher;
pub use registry::ServiceRegistry;
pub use writer::{CharacteristicWriter, WriteError};
