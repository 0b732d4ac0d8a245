//! # coupling-app
//!
//! Application layer: the coupling rule and the ports it talks through.
//!
//! ## Responsibilities
//! - Define **ports** (traits) for the bridge registry, the characteristic
//!   write primitive and event publication
//! - Implement the [`CouplingRule`](coupling_rule::CouplingRule) that mirrors
//!   an initiator's `On` state onto a receiver
//! - Provide an in-process event bus and the listener loop that feeds the rule
//!
//! ## Dependency rule
//! Depends only on `coupling-domain`. Never imports adapter crates.

pub mod coupling_rule;
pub mod event_bus;
pub mod listener;
pub mod ports;
