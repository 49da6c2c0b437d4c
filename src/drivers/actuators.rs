//! Binary actuator drivers (pump relay, fan relay, grow-light panel).
//!
//! Dumb on/off GPIO outputs.  The control pass rewrites every output on
//! every iteration, so `set` writes the level unconditionally — there is
//! no edge detection here, only a cached state for read-back.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

/// One relay/MOSFET-driven output pin.
pub struct BinaryActuator {
    gpio: i32,
    on: bool,
}

impl BinaryActuator {
    /// Wrap an output pin.  `hw_init` already drove it low at boot.
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    /// Drive the output.  Unconditional write, matching the
    /// recompute-from-scratch control contract.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    /// Last commanded state (mirrors the GPIO level).
    pub fn is_on(&self) -> bool {
        self.on
    }
}
