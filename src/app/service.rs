//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the sampling engine, the setpoint state, and the
//! telemetry cadence.  It exposes a clean, hardware-agnostic API.  All
//! I/O flows through port traits injected at call sites, making the
//! entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//! ActuatorPort ◀──│  Filter · Control ·     │──▶ TelemetryPort
//!                 │  Setpoints · Cadence    │
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::command::parser;
use crate::config::SystemConfig;
use crate::control::{self, ActuatorCommand};
use crate::sampling::{FilteredReadings, SamplingEngine};
use crate::setpoints::SetpointState;
use crate::telemetry;

use super::commands::SetpointCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort, TelemetryPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    sampling: SamplingEngine,
    setpoints: SetpointState,
    /// Last applied actuator command, kept for change detection only —
    /// the outputs themselves are rewritten every pass.
    actuators: ActuatorCommand,
    telemetry_interval_ms: u32,
    last_telemetry_ms: u32,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            sampling: SamplingEngine::new(),
            setpoints: SetpointState::from_config(config),
            actuators: ActuatorCommand::default(),
            telemetry_interval_ms: config.telemetry_interval_ms,
            last_telemetry_ms: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Put the actuators into their known boot state (all off).
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        sink.emit(&AppEvent::Started);
        info!("AppService started, actuators off");
    }

    // ── Sampling path (100 ms cadence) ────────────────────────

    /// Ingest one sampling tick: read the ADCs, update the filter, and
    /// let the engine count light seconds against the current grow-light
    /// GPIO state.
    pub fn sample_tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort)) {
        let raw = hw.read_raw();
        let grow_light_on = hw.grow_light_is_on();
        self.sampling.ingest(raw, grow_light_on, &self.setpoints);
    }

    // ── Command handling (foreground) ─────────────────────────

    /// Interpret one received command line and apply it.  Unrecognised
    /// lines are dropped without feedback.
    pub fn handle_line(&mut self, line: &[u8], sink: &mut impl EventSink) {
        match parser::interpret(line) {
            Some(cmd) => {
                self.apply(cmd);
                sink.emit(&AppEvent::SetpointChanged(cmd));
            }
            None => {
                // Fail-silent protocol: no NAK, no log spam on garbage.
            }
        }
    }

    fn apply(&mut self, cmd: SetpointCommand) {
        match cmd {
            SetpointCommand::HumidityThreshold(raw) => self.setpoints.humidity_threshold = raw,
            SetpointCommand::TemperatureThreshold(raw) => {
                self.setpoints.temperature_threshold = raw;
            }
            SetpointCommand::LightThreshold(raw) => self.setpoints.light_threshold = raw,
            SetpointCommand::PhotoperiodEnabled(on) => self.setpoints.photoperiod_enabled = on,
            SetpointCommand::LightGoalSecs(secs) => self.setpoints.budget.set_goal_secs(secs),
            SetpointCommand::ResetLightTimer => self.setpoints.budget.reset(),
        }
    }

    // ── Control path (every superloop iteration) ──────────────

    /// Recompute all three actuators from the current filtered readings
    /// and rewrite the outputs unconditionally.
    pub fn control_tick(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let next = control::evaluate(self.sampling.filtered(), &self.setpoints);

        hw.set_pump(next.pump);
        hw.set_fan(next.fan);
        hw.set_grow_light(next.grow_light);

        if next != self.actuators {
            self.actuators = next;
            sink.emit(&AppEvent::ActuatorsChanged {
                pump: next.pump,
                fan: next.fan,
                grow_light: next.grow_light,
            });
        }
    }

    // ── Telemetry path (1 Hz) ─────────────────────────────────

    /// Emit a telemetry packet if the interval has elapsed on the
    /// monotonic clock.  Returns `true` on emission — the caller feeds
    /// the watchdog on that liveness signal.
    pub fn poll_telemetry(
        &mut self,
        now_ms: u32,
        hw: &mut (impl ActuatorPort + TelemetryPort),
        sink: &mut impl EventSink,
    ) -> bool {
        if now_ms.wrapping_sub(self.last_telemetry_ms) < self.telemetry_interval_ms {
            return false;
        }
        self.last_telemetry_ms = now_ms;

        let readings = self.sampling.filtered();
        let data = TelemetryData {
            light: readings.light,
            temperature: readings.temperature,
            moisture: readings.moisture,
            grow_light_on: hw.grow_light_is_on(),
            light_accumulated_secs: self.setpoints.budget.accumulated_secs(),
        };

        let packet = telemetry::encode(readings, data.grow_light_on, data.light_accumulated_secs);
        hw.transmit(&packet);
        sink.emit(&AppEvent::Telemetry(data));
        true
    }

    // ── Queries ───────────────────────────────────────────────

    /// Latest filtered readings.
    pub fn filtered(&self) -> FilteredReadings {
        self.sampling.filtered()
    }

    /// Current setpoint state.
    pub fn setpoints(&self) -> &SetpointState {
        &self.setpoints
    }

    /// Last applied actuator command.
    pub fn actuators(&self) -> ActuatorCommand {
        self.actuators
    }
}
