//! Estufa Firmware — Main Entry Point
//!
//! Hexagonal architecture around a cooperative superloop:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter       LogEventSink        Esp32TimeAdapter    │
//! │  (Sensor+Actuator+     (EventSink)         (monotonic ms)      │
//! │   Telemetry ports)                                             │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Filter · Setpoints · Control · Telemetry cadence      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Timer ISR ──▶ event queue ──▶ superloop ◀── UART RX channel   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Superloop order each iteration: drain ISR events (sampling ticks),
//! interpret any pending command line, recompute the actuators, and emit
//! telemetry on its 1 Hz cadence — feeding the watchdog only on that
//! liveness path.

#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod sampling;
pub mod setpoints;
pub mod telemetry;

pub mod pins;

pub mod adapters;
pub mod app;
pub mod drivers;
pub mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use app::service::AppService;
use command::CommandChannel;
use config::SystemConfig;
use drivers::actuators::BinaryActuator;
use drivers::watchdog::Watchdog;
use events::Event;
use sensors::AnalogChannels;

// ── Shared ISR state ──────────────────────────────────────────
//
// The command channel is the only object shared with the receive path;
// its interior is a critical-section mutex plus an atomic ready flag,
// so a plain static is all the plumbing it needs.

static COMMAND_RX: CommandChannel = CommandChannel::new();

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    #[cfg(not(target_os = "espidf"))]
    env_logger::init();

    info!("estufa v{} — greenhouse controller", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::default();

    // ── 2. Peripheral bring-up ────────────────────────────────
    if let Err(e) = init_hardware(&config) {
        // Init failure is critical — log and halt.  In production the
        // watchdog turns the halt into a reset loop.
        log::error!("hardware init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    drivers::hw_timer::start_timers(config.sample_interval_ms);
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        AnalogChannels::new(),
        BinaryActuator::new(pins::PUMP_GPIO),
        BinaryActuator::new(pins::FAN_GPIO),
        BinaryActuator::new(pins::GROW_LIGHT_GPIO),
    );
    let mut sink = LogEventSink::new();
    let time = Esp32TimeAdapter::new();

    // ── 4. Construct app service ──────────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering control loop.");

    #[cfg(not(target_os = "espidf"))]
    let mut sim_elapsed_ms: u32 = 0;

    // ── 5. Superloop ──────────────────────────────────────────
    loop {
        // Idle delay: a throttle, not a wait.  On real hardware the
        // timer and UART interrupts preempt this freely.
        #[cfg(target_os = "espidf")]
        esp_idf_svc::hal::delay::FreeRtos::delay_ms(config.idle_delay_ms);

        // Simulate the sampling timer via the sleep cadence on hosts.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(
                config.idle_delay_ms,
            )));
            sim_elapsed_ms = sim_elapsed_ms.wrapping_add(config.idle_delay_ms);
            if sim_elapsed_ms % config.sample_interval_ms == 0 {
                events::push_event(Event::SampleTick);
            }
        }

        // Move freshly received bytes into the command channel.
        drivers::uart::poll_rx(&COMMAND_RX);

        // 5a. Drain ISR events.
        events::drain_events(|event| match event {
            Event::SampleTick => app.sample_tick(&mut hw),
            // Just a wake-up: the ready indicator below is authoritative.
            Event::LineReady => {}
        });

        // 5b. Interpret a pending command line, if any.
        if let Some(line) = COMMAND_RX.take() {
            app.handle_line(&line, &mut sink);
        }

        // 5c. Recompute and rewrite every actuator.
        app.control_tick(&mut hw, &mut sink);

        // 5d. Telemetry at 1 Hz; emission doubles as the liveness signal.
        if app.poll_telemetry(time.uptime_ms(), &mut hw, &mut sink) {
            watchdog.feed();
        }
    }
}

/// Funnel every fallible init step through one typed `Result`.
fn init_hardware(config: &SystemConfig) -> error::Result<()> {
    drivers::hw_init::init_peripherals()?;
    drivers::uart::init(config.uart_baud)?;
    Ok(())
}
