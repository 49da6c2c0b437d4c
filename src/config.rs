//! System configuration parameters
//!
//! All tunable parameters for the greenhouse controller.  Thresholds are
//! raw ADC counts, not engineering units — the host dashboard owns unit
//! conversion.  Runtime setpoint changes arrive over the serial command
//! protocol; this struct only carries the power-on defaults.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Setpoint defaults (raw ADC domain) ---
    /// Soil-moisture reading above which the pump runs (higher = drier).
    pub humidity_threshold_raw: u16,
    /// NTC reading below which the fan runs (lower = hotter).
    pub temperature_threshold_raw: u16,
    /// LDR reading at or below which natural light counts as daylight
    /// (lower = brighter).
    pub light_threshold_raw: u16,

    // --- Photoperiod ---
    /// Whether the daily light-budget policy gates the grow-light at boot.
    pub photoperiod_enabled: bool,
    /// Daily light-exposure goal in seconds.
    pub light_goal_secs: u32,

    // --- Timing ---
    /// Sensor sampling interval (milliseconds).
    pub sample_interval_ms: u32,
    /// Telemetry emission interval (milliseconds).
    pub telemetry_interval_ms: u32,
    /// Watchdog reset window (milliseconds).
    pub watchdog_timeout_ms: u32,
    /// Superloop idle delay (milliseconds).
    pub idle_delay_ms: u32,

    // --- Serial link ---
    /// UART baud rate for commands and telemetry.
    pub uart_baud: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Setpoints
            humidity_threshold_raw: 3000,
            temperature_threshold_raw: 1600,
            light_threshold_raw: 2000,

            // Photoperiod: off until the host enables it explicitly
            photoperiod_enabled: false,
            light_goal_secs: 14 * 3600, // 14 h of light per day

            // Timing
            sample_interval_ms: 100,     // 10 Hz
            telemetry_interval_ms: 1000, // 1 Hz
            watchdog_timeout_ms: 2000,
            idle_delay_ms: 1,

            // Serial
            uart_baud: 9600,
        }
    }
}
