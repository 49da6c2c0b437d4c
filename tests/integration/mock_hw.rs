//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call and transmitted packet so tests can
//! assert on the full command history without touching real GPIO or a
//! real UART.

use estufa::app::events::AppEvent;
use estufa::app::ports::{ActuatorPort, EventSink, SensorPort, TelemetryPort};
use estufa::sampling::RawSample;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Pump(bool),
    Fan(bool),
    GrowLight(bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Raw sample served to every `read_raw` call.
    pub raw: RawSample,
    pub calls: Vec<ActuatorCall>,
    pub pump: bool,
    pub fan: bool,
    pub grow_light: bool,
    /// Every telemetry frame handed to the transport.
    pub transmitted: Vec<Vec<u8>>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            raw: RawSample::default(),
            calls: Vec::new(),
            pump: false,
            fan: false,
            grow_light: false,
            transmitted: Vec::new(),
        }
    }

    pub fn set_raw(&mut self, light: u16, temperature: u16, moisture: u16) {
        self.raw = RawSample {
            light,
            temperature,
            moisture,
        };
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_raw(&mut self) -> RawSample {
        self.raw
    }
}

impl ActuatorPort for MockHardware {
    fn set_pump(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Pump(on));
        self.pump = on;
    }

    fn set_fan(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Fan(on));
        self.fan = on;
    }

    fn set_grow_light(&mut self, on: bool) {
        self.calls.push(ActuatorCall::GrowLight(on));
        self.grow_light = on;
    }

    fn grow_light_is_on(&self) -> bool {
        self.grow_light
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
        self.pump = false;
        self.fan = false;
        self.grow_light = false;
    }
}

impl TelemetryPort for MockHardware {
    fn transmit(&mut self, packet: &[u8]) {
        self.transmitted.push(packet.to_vec());
    }
}

// ── Recording event sink ──────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| e.contains(needle))
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{:?}", event));
    }
}
