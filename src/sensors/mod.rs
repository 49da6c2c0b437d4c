//! Analog input subsystem.
//!
//! Three ADC1 channels, read together once per sampling tick: LDR light
//! level, NTC temperature proxy, and soil moisture.  Values stay in the
//! raw count domain — filtering happens in the sampling engine and unit
//! conversion happens on the host.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the oneshot ADC channels initialised by `hw_init`.
//! On host/test: reads three static `AtomicU16`s for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::sampling::RawSample;

#[cfg(not(target_os = "espidf"))]
static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_MOISTURE_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_moisture_adc(raw: u16) {
    SIM_MOISTURE_ADC.store(raw, Ordering::Relaxed);
}

/// The three greenhouse analog channels behind one read call.
pub struct AnalogChannels;

impl Default for AnalogChannels {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogChannels {
    pub fn new() -> Self {
        Self
    }

    /// Read all channels in one pass.  Infallible: an ADC error reads as
    /// zero and flows through the filter like any other count.
    #[cfg(target_os = "espidf")]
    pub fn read(&mut self) -> RawSample {
        RawSample {
            light: hw_init::adc1_read(hw_init::ADC1_CH_LIGHT),
            temperature: hw_init::adc1_read(hw_init::ADC1_CH_TEMP),
            moisture: hw_init::adc1_read(hw_init::ADC1_CH_MOISTURE),
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&mut self) -> RawSample {
        RawSample {
            light: SIM_LIGHT_ADC.load(Ordering::Relaxed),
            temperature: SIM_TEMP_ADC.load(Ordering::Relaxed),
            moisture: SIM_MOISTURE_ADC.load(Ordering::Relaxed),
        }
    }
}
