//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  The production adapter
//! logs them to the serial console; tests record them.

use super::commands::SetpointCommand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The application service has started; actuators are known-off.
    Started,

    /// Periodic telemetry snapshot (mirrors the binary packet contents).
    Telemetry(TelemetryData),

    /// A setpoint command was accepted and applied.
    SetpointChanged(SetpointCommand),

    /// The control pass flipped at least one actuator.
    ActuatorsChanged {
        pump: bool,
        fan: bool,
        grow_light: bool,
    },
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    pub light: u16,
    pub temperature: u16,
    pub moisture: u16,
    pub grow_light_on: bool,
    pub light_accumulated_secs: u32,
}
