//! Demo services exposed by the virtual bridge.

use coupling_domain::characteristic::Characteristic;
use coupling_domain::service::Service;

/// Instance id used for the `On` characteristic of every demo service.
pub const ON_IID: u64 = 10;

/// A switch, off at startup.
#[must_use]
pub fn switch() -> Service {
    Service::new("Switch", "virtual_switch")
        .with_characteristic(Characteristic::new("Name", 2).with_value("Switch"))
        .with_characteristic(Characteristic::on(ON_IID).with_value(false))
}

/// A lamp, off at startup, dimmable.
#[must_use]
pub fn lamp() -> Service {
    Service::new("Lamp", "virtual_lamp")
        .with_characteristic(Characteristic::new("Name", 2).with_value("Lamp"))
        .with_characteristic(Characteristic::on(ON_IID).with_value(false))
        .with_characteristic(Characteristic::new("Brightness", 11).with_value(100))
}

/// A temperature sensor: no `On` characteristic at all.
#[must_use]
pub fn thermometer() -> Service {
    Service::new("Thermometer", "virtual_thermometer")
        .with_characteristic(Characteristic::new("CurrentTemperature", 12).with_value(21.5))
}
