//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, serial link, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::sampling::RawSample;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per sampling tick.
///
/// Reads are infallible by contract — a dead sensor reads as whatever the
/// ADC returns, and the moving-average filter carries on.
pub trait SensorPort {
    /// Read all three analog channels in one pass.
    fn read_raw(&mut self) -> RawSample;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain rewrites every output each control pass.
pub trait ActuatorPort {
    /// Drive the irrigation pump relay.
    fn set_pump(&mut self, on: bool);

    /// Drive the exhaust fan relay.
    fn set_fan(&mut self, on: bool);

    /// Drive the grow-light panel.
    fn set_grow_light(&mut self, on: bool);

    /// Current grow-light GPIO state.  The sampling engine uses this to
    /// count artificial light toward the daily budget.
    fn grow_light_is_on(&self) -> bool;

    /// Kill all three outputs — boot state and safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Telemetry port (driven adapter: domain → serial link)
// ───────────────────────────────────────────────────────────────

/// Outbound packet transport.  A bounded blocking write is acceptable at
/// the 1 Hz emission cadence; there is no acknowledgment and no retry.
pub trait TelemetryPort {
    fn transmit(&mut self, packet: &[u8]);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a test
/// recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
