//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`AnalogChannels`] and all three actuator drivers, exposing
//! them through [`SensorPort`], [`ActuatorPort`], and [`TelemetryPort`].
//! This is the only module in the system that touches actual hardware.
//! On non-espidf targets, the underlying drivers use cfg-gated
//! simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort, TelemetryPort};
use crate::drivers::actuators::BinaryActuator;
use crate::drivers::uart;
use crate::sampling::RawSample;
use crate::sensors::AnalogChannels;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    channels: AnalogChannels,
    pump: BinaryActuator,
    fan: BinaryActuator,
    grow_light: BinaryActuator,
}

impl HardwareAdapter {
    pub fn new(
        channels: AnalogChannels,
        pump: BinaryActuator,
        fan: BinaryActuator,
        grow_light: BinaryActuator,
    ) -> Self {
        Self {
            channels,
            pump,
            fan,
            grow_light,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_raw(&mut self) -> RawSample {
        self.channels.read()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_pump(&mut self, on: bool) {
        self.pump.set(on);
    }

    fn set_fan(&mut self, on: bool) {
        self.fan.set(on);
    }

    fn set_grow_light(&mut self, on: bool) {
        self.grow_light.set(on);
    }

    fn grow_light_is_on(&self) -> bool {
        self.grow_light.is_on()
    }

    fn all_off(&mut self) {
        self.pump.set(false);
        self.fan.set(false);
        self.grow_light.set(false);
    }
}

// ── TelemetryPort implementation ──────────────────────────────

impl TelemetryPort for HardwareAdapter {
    fn transmit(&mut self, packet: &[u8]) {
        uart::write_blocking(packet);
    }
}
