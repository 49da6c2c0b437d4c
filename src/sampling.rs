//! Moving-average sampling engine.
//!
//! Runs once per 100 ms tick.  Each analog channel keeps a 32-slot ring of
//! raw ADC counts plus a running sum, updated incrementally: subtract the
//! sample being evicted, add the new one, never recompute from scratch.
//! The filtered reading is `sum >> 5`, an integer mean of the last 32
//! samples.  All three channels share one ring index and therefore one
//! cadence.
//!
//! The engine also owns the photoperiod second-counter: every 10th tick it
//! decides whether light was present (grow-light on, or the filtered LDR
//! reading at or below the daylight threshold) and, if so, adds one second
//! to the daily budget.  Counting is independent of whether the
//! photoperiod policy is enabled — the budget fills even while the policy
//! is off.

use crate::setpoints::SetpointState;

/// Right-shift applied to the running sum (divide by 32).
pub const FILTER_SHIFT: u32 = 5;
/// Ring depth per channel.
pub const FILTER_DEPTH: usize = 1 << FILTER_SHIFT;

/// Sampling ticks per counted second (100 ms tick → 10 per second).
const TICKS_PER_SECOND: u8 = 10;

// ───────────────────────────────────────────────────────────────
//  Sample types
// ───────────────────────────────────────────────────────────────

/// One raw ADC reading per channel, taken in the same tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    pub light: u16,
    pub temperature: u16,
    pub moisture: u16,
}

/// Filtered (32-sample mean) counterpart of [`RawSample`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilteredReadings {
    pub light: u16,
    pub temperature: u16,
    pub moisture: u16,
}

// ───────────────────────────────────────────────────────────────
//  Per-channel ring history
// ───────────────────────────────────────────────────────────────

/// Invariant: `sum` equals the sum of every slot in `samples`.
struct ChannelHistory {
    samples: [u16; FILTER_DEPTH],
    sum: u32,
}

impl ChannelHistory {
    const fn new() -> Self {
        Self {
            samples: [0; FILTER_DEPTH],
            sum: 0,
        }
    }

    /// Replace the slot at `index` with `raw` and return the new filtered
    /// value.  O(1): evict-subtract, add, shift.
    fn update(&mut self, index: usize, raw: u16) -> u16 {
        self.sum = self.sum - u32::from(self.samples[index]) + u32::from(raw);
        self.samples[index] = raw;
        (self.sum >> FILTER_SHIFT) as u16
    }
}

// ───────────────────────────────────────────────────────────────
//  Sampling engine
// ───────────────────────────────────────────────────────────────

pub struct SamplingEngine {
    light: ChannelHistory,
    temperature: ChannelHistory,
    moisture: ChannelHistory,
    /// Shared ring index, advanced after all three channels update.
    index: usize,
    /// Ticks since the last counted second (0..TICKS_PER_SECOND).
    second_ticks: u8,
    filtered: FilteredReadings,
}

impl Default for SamplingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingEngine {
    pub fn new() -> Self {
        Self {
            light: ChannelHistory::new(),
            temperature: ChannelHistory::new(),
            moisture: ChannelHistory::new(),
            index: 0,
            second_ticks: 0,
            filtered: FilteredReadings::default(),
        }
    }

    /// Ingest one tick's raw sample.
    ///
    /// `grow_light_on` is the actuator's current GPIO state, not the
    /// control decision in flight — artificial light counts toward the
    /// daily budget the moment the panel is energised.
    pub fn ingest(
        &mut self,
        raw: RawSample,
        grow_light_on: bool,
        setpoints: &SetpointState,
    ) -> FilteredReadings {
        self.filtered.light = self.light.update(self.index, raw.light);
        self.filtered.temperature = self.temperature.update(self.index, raw.temperature);
        self.filtered.moisture = self.moisture.update(self.index, raw.moisture);
        self.index = (self.index + 1) % FILTER_DEPTH;

        self.second_ticks += 1;
        if self.second_ticks >= TICKS_PER_SECOND {
            self.second_ticks = 0;

            // LDR polarity is inverted: lower raw value = brighter.
            let daylight = self.filtered.light <= setpoints.light_threshold;
            if grow_light_on || daylight {
                setpoints.budget.add_second();
            }
        }

        self.filtered
    }

    /// Latest filtered readings.
    pub fn filtered(&self) -> FilteredReadings {
        self.filtered
    }
}

// ───────────────────────────────────────────────────────────────
//  Tests
// ───────────────────────────────────────────────────────────────
