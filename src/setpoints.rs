//! Runtime setpoint state.
//!
//! ## Ownership discipline
//!
//! Every field except the light accumulator has exactly one writer: the
//! command interpreter, running in the foreground loop.  The sampling path
//! only reads the thresholds, one word at a time.  The accumulator is the
//! single two-writer field in the system — the sampling engine increments
//! it once per counted second and the interpreter can zero it on
//! `RESET,TIMER_LUZ` — so both paths go through atomics.
//!
//! A torn 32-bit read of the accumulator across one 100 ms tick would be
//! an acceptable approximation here; `AtomicU32` relaxed loads make the
//! question moot at no locking cost.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::SystemConfig;

// ───────────────────────────────────────────────────────────────
//  Daily light budget
// ───────────────────────────────────────────────────────────────

/// Accumulated-versus-goal pair backing the photoperiod policy.
#[derive(Debug)]
pub struct LightBudget {
    /// Daily light-exposure goal, seconds.  Written by the interpreter only.
    goal_secs: u32,
    /// Seconds of light (sun or grow-light) counted today.
    ///
    /// Two writers: `add_second` (sampling path) and `reset`
    /// (interpreter path).  Atomic RMW on the increment means a reset
    /// racing an increment linearises to either 0 or 1, never a lost
    /// update.
    accumulated_secs: AtomicU32,
}

impl LightBudget {
    pub fn new(goal_secs: u32) -> Self {
        Self {
            goal_secs,
            accumulated_secs: AtomicU32::new(0),
        }
    }

    /// Count one second of light exposure.  Sampling-path writer.
    pub fn add_second(&self) {
        self.accumulated_secs.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero the daily counter.  Interpreter-path writer.
    pub fn reset(&self) {
        self.accumulated_secs.store(0, Ordering::Relaxed);
    }

    pub fn set_goal_secs(&mut self, secs: u32) {
        self.goal_secs = secs;
    }

    pub fn goal_secs(&self) -> u32 {
        self.goal_secs
    }

    pub fn accumulated_secs(&self) -> u32 {
        self.accumulated_secs.load(Ordering::Relaxed)
    }

    /// True once the daily goal is met.  Exact equality counts as met.
    pub fn goal_reached(&self) -> bool {
        self.accumulated_secs() >= self.goal_secs
    }
}

// ───────────────────────────────────────────────────────────────
//  Setpoint container
// ───────────────────────────────────────────────────────────────

/// All host-adjustable control parameters, raw ADC domain.
#[derive(Debug)]
pub struct SetpointState {
    /// Pump runs above this soil-moisture reading (higher = drier).
    pub humidity_threshold: u16,
    /// Fan runs below this NTC reading (lower = hotter).
    pub temperature_threshold: u16,
    /// At or below this LDR reading, natural light counts as daylight.
    pub light_threshold: u16,
    /// Whether the photoperiod policy gates the grow-light at all.
    pub photoperiod_enabled: bool,
    /// Daily light budget (goal + accumulator).
    pub budget: LightBudget,
}

impl SetpointState {
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            humidity_threshold: config.humidity_threshold_raw,
            temperature_threshold: config.temperature_threshold_raw,
            light_threshold: config.light_threshold_raw,
            photoperiod_enabled: config.photoperiod_enabled,
            budget: LightBudget::new(config.light_goal_secs),
        }
    }
}
