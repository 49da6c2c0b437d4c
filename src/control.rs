//! Actuator decision rules.
//!
//! Pure threshold logic, recomputed from scratch on every superloop
//! iteration and applied unconditionally — no hysteresis, no debounce, no
//! memory of the previous decision.  Each pass is self-healing: whatever
//! state a glitch leaves the outputs in lasts at most one iteration.

use crate::sampling::FilteredReadings;
use crate::setpoints::SetpointState;

/// Desired state of the three binary outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorCommand {
    pub pump: bool,
    pub fan: bool,
    pub grow_light: bool,
}

/// Compute the actuator outputs for the current readings and setpoints.
///
/// - Pump: strictly drier than the humidity threshold (higher raw = drier).
/// - Fan: strictly hotter than the temperature threshold (lower raw =
///   hotter for the NTC divider).
/// - Grow-light: only considered while the photoperiod policy is enabled
///   and the daily budget is unmet (exact equality counts as met); then it
///   follows darkness — strictly above the light threshold means natural
///   light is insufficient.  In every other case the panel is forced off.
pub fn evaluate(readings: FilteredReadings, setpoints: &SetpointState) -> ActuatorCommand {
    let pump = readings.moisture > setpoints.humidity_threshold;
    let fan = readings.temperature < setpoints.temperature_threshold;

    let grow_light = if setpoints.photoperiod_enabled && !setpoints.budget.goal_reached() {
        readings.light > setpoints.light_threshold
    } else {
        false
    };

    ActuatorCommand {
        pump,
        fan,
        grow_light,
    }
}
