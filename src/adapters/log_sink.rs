//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART0 / USB-CDC console in production).  The binary
//! telemetry frame goes out on the data UART separately; this is the
//! human-readable mirror.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | actuators off, setpoints at defaults");
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | light={} temp={} moist={} | led={} | light_secs={}",
                    t.light,
                    t.temperature,
                    t.moisture,
                    if t.grow_light_on { "ON" } else { "off" },
                    t.light_accumulated_secs,
                );
            }
            AppEvent::SetpointChanged(cmd) => {
                info!("SETPOINT | {:?}", cmd);
            }
            AppEvent::ActuatorsChanged {
                pump,
                fan,
                grow_light,
            } => {
                info!(
                    "ACTUATE | pump={} fan={} light={}",
                    if *pump { "ON" } else { "off" },
                    if *fan { "ON" } else { "off" },
                    if *grow_light { "ON" } else { "off" },
                );
            }
        }
    }
}
