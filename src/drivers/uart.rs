//! UART command/telemetry link.
//!
//! One serial port carries both directions of the external protocol:
//! inbound ASCII setpoint commands and outbound 13-byte telemetry frames.
//!
//! Receive side: the ESP-IDF UART driver's interrupt drains the hardware
//! FIFO into its ring buffer as bytes arrive; `poll_rx` moves whatever is
//! already buffered into the [`CommandChannel`] with a zero-tick read, so
//! one call does bounded work and never blocks.  Only byte appends and
//! terminator detection happen on this path — parsing stays in the
//! foreground interpreter.
//!
//! Transmit side: `write_blocking` hands the frame to the driver's TX
//! path and waits for it to be queued.  13 bytes at 9600 baud is ~14 ms,
//! fine at the 1 Hz telemetry cadence.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::command::CommandChannel;
#[cfg(target_os = "espidf")]
use crate::error::CommsError;
#[cfg(target_os = "espidf")]
use crate::events::{push_event, Event};
#[cfg(target_os = "espidf")]
use crate::pins;

/// UART controller used for the host link (UART0 carries the console).
#[cfg(target_os = "espidf")]
const UART_PORT: uart_port_t = 1;

/// Driver-side RX ring size.  Must exceed the 128-byte hardware FIFO.
#[cfg(target_os = "espidf")]
const RX_RING_BYTES: i32 = 256;

#[cfg(target_os = "espidf")]
pub fn init(baud: u32) -> Result<(), CommsError> {
    // SAFETY: called once from main() before the superloop; single-threaded.
    unsafe {
        let cfg = uart_config_t {
            baud_rate: baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };
        let ret = uart_param_config(UART_PORT, &cfg);
        if ret != ESP_OK {
            return Err(CommsError::UartConfigFailed(ret));
        }

        let ret = uart_set_pin(UART_PORT, pins::UART_TX_GPIO, pins::UART_RX_GPIO, -1, -1);
        if ret != ESP_OK {
            return Err(CommsError::UartConfigFailed(ret));
        }

        let ret = uart_driver_install(UART_PORT, RX_RING_BYTES, 0, 0, core::ptr::null_mut(), 0);
        if ret != ESP_OK {
            return Err(CommsError::UartInstallFailed(ret));
        }
    }
    log::info!("uart: port {} up at {} baud", UART_PORT, baud);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init(baud: u32) -> Result<(), crate::error::CommsError> {
    log::info!("uart(sim): no serial port ({} baud nominal)", baud);
    Ok(())
}

/// Drain every byte the driver has already received into the command
/// channel.  Pushes [`Event::LineReady`] for each completed line.
#[cfg(target_os = "espidf")]
pub fn poll_rx(channel: &CommandChannel) {
    let mut chunk = [0u8; 32];
    loop {
        // Zero ticks: take only what the RX interrupt already captured.
        let n = unsafe {
            uart_read_bytes(
                UART_PORT,
                chunk.as_mut_ptr().cast(),
                chunk.len() as u32,
                0,
            )
        };
        if n <= 0 {
            break;
        }
        for &byte in &chunk[..n as usize] {
            if channel.push_byte(byte) {
                push_event(Event::LineReady);
            }
        }
        if (n as usize) < chunk.len() {
            break;
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn poll_rx(_channel: &CommandChannel) {}

/// Transmit one telemetry frame.  Bounded blocking write.
#[cfg(target_os = "espidf")]
pub fn write_blocking(bytes: &[u8]) {
    // Fire-and-forget: a short write at this cadence is not recoverable
    // anyway, and the host resynchronises on the terminator byte.
    let _ = unsafe { uart_write_bytes(UART_PORT, bytes.as_ptr().cast(), bytes.len() as _) };
}

#[cfg(not(target_os = "espidf"))]
pub fn write_blocking(bytes: &[u8]) {
    log::debug!("uart(sim): tx {:02x?}", bytes);
}
