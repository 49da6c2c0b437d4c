//! GPIO / peripheral pin assignments for the greenhouse controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR light sensor — voltage divider to ADC.  Lower raw value = brighter.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const LIGHT_ADC_GPIO: i32 = 4;

/// NTC thermistor — 10 kΩ @ 25 °C, voltage divider to ADC.
/// Lower raw value = hotter for this divider orientation.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 5;

/// Resistive soil-moisture probe.  Higher raw value = drier soil.
/// ADC1 channel 5 (GPIO 6 on ESP32-S3).
pub const MOISTURE_ADC_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Actuators — binary GPIO outputs (relay / MOSFET drivers)
// ---------------------------------------------------------------------------

/// Irrigation pump relay (active HIGH).
pub const PUMP_GPIO: i32 = 11;

/// Exhaust fan relay (active HIGH).
pub const FAN_GPIO: i32 = 12;

/// Grow-light LED panel driver (active HIGH).
pub const GROW_LIGHT_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// UART command / telemetry link
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
