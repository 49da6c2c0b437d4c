//! Inbound commands to the application service.
//!
//! These are the decoded forms of the serial line protocol — what the
//! host dashboard can ask the controller to change.  The
//! [`AppService`](super::service::AppService) applies them to the live
//! [`SetpointState`](crate::setpoints::SetpointState).

/// Commands the serial protocol can deliver into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetpointCommand {
    /// `SET,HUMID,<raw>` — pump activation threshold.
    HumidityThreshold(u16),
    /// `SET,TEMP,<raw>` — fan activation threshold.
    TemperatureThreshold(u16),
    /// `SET,LDR,<raw>` — daylight threshold.
    LightThreshold(u16),
    /// `SET,FOTO,<0|1>` — enable or disable the photoperiod policy.
    PhotoperiodEnabled(bool),
    /// `SET,META_LUZ,<secs>` — daily light goal in seconds.
    LightGoalSecs(u32),
    /// `RESET,TIMER_LUZ` — zero the daily light accumulator.
    ResetLightTimer,
}
