//! # couplingd — accessory status coupling daemon
//!
//! Composition root that wires the virtual bridge, the event bus and the
//! coupling rule together, then listens until Ctrl-C.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Construct the event bus and the bridge adapter
//! - Construct the coupling rule, injecting the bridge through the port traits
//! - Run the listener and handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use coupling_adapter_virtual::VirtualBridge;
use coupling_app::coupling_rule::CouplingRule;
use coupling_app::event_bus::InProcessEventBus;
use coupling_app::listener::listen;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let coupling = config.coupling()?;
    tracing::info!(
        initiator = %coupling.initiator(),
        receiver = %coupling.receiver(),
        "coupling configured"
    );

    // Event bus
    let bus = Arc::new(InProcessEventBus::new(config.bus.capacity));
    let receiver = bus.subscribe();

    // Bridge
    let bridge = Arc::new(VirtualBridge::new(Arc::clone(&bus)));

    // Rule
    let initiator = coupling.initiator().to_string();
    let rule = CouplingRule::new(coupling, Arc::clone(&bridge), Arc::clone(&bridge));

    if config.demo.toggle_on_start {
        match bridge.toggle(&initiator) {
            Ok(on) => tracing::info!(service = %initiator, on, "virtual initiator toggled"),
            Err(err) => tracing::warn!(%err, service = %initiator, "could not toggle virtual initiator"),
        }
    }

    tokio::select! {
        report = listen(&rule, receiver) => {
            tracing::info!(?report, "event bus closed");
        }
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("shutting down");
        }
    }

    Ok(())
}
