//! # coupling-domain
//!
//! Pure domain model for the accessory status coupling rule.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Characteristics** (typed properties of a service, e.g. `On`)
//! - Define **Services** (addressable units of an accessory, as listed by the bridge registry)
//! - Define **Events** (characteristic-change notifications for one service)
//! - Define **Outcomes** (the observable result of running the rule once)
//! - Define the validated **coupling** configuration (initiator → receiver)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod characteristic;
pub mod coupling;
pub mod event;
pub mod outcome;
pub mod service;
