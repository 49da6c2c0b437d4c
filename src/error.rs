//! Unified error types for the greenhouse controller firmware.
//!
//! The control core itself is fail-silent: bad command lines are dropped,
//! sensor reads always yield a value, and the watchdog is the only hard
//! recovery.  The typed errors here cover the one place things can
//! legitimately fail — peripheral bring-up — so `main()` can funnel every
//! init path through a single `Result`.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible init operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// ADC / GPIO peripheral initialisation failed.
    Init(HwInitError),
    /// The serial link could not be brought up.
    Comms(CommsError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Comms(e) => write!(f, "comms: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// `uart_param_config` rejected the line settings.
    UartConfigFailed(i32),
    /// The UART driver (RX ring + ISR) could not be installed.
    UartInstallFailed(i32),
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UartConfigFailed(rc) => write!(f, "UART config failed (rc={rc})"),
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={rc})"),
        }
    }
}

impl From<CommsError> for Error {
    fn from(e: CommsError) -> Self {
        Self::Comms(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
