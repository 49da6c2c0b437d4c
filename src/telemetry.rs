//! Telemetry packet encoder.
//!
//! Wire format (13 bytes, big-endian, emitted at 1 Hz):
//! ```text
//! ┌───────────┬───────────┬───────────┬─────┬─────────────┬─────┬──────┐
//! │ light u16 │ temp  u16 │ moist u16 │ LED │ light-secs  │ CHK │ 0xAA │
//! │ bytes 0-1 │ bytes 2-3 │ bytes 4-5 │  6  │ u32 7-10    │ 11  │  12  │
//! └───────────┴───────────┴───────────┴─────┴─────────────┴─────┴──────┘
//! ```
//! `CHK` is the sum of bytes 0..=10 truncated to 8 bits.  Fire-and-forget:
//! no acknowledgment, no retry — the host validates checksum and
//! terminator on its side and drops bad frames.  Values are raw filtered
//! ADC counts; no unit conversion happens on the device.

use crate::sampling::FilteredReadings;

/// Total packet size on the wire.
pub const PACKET_LEN: usize = 13;
/// Fixed end-of-packet marker.
pub const PACKET_TERMINATOR: u8 = 0xAA;
/// Bytes covered by the checksum (everything before it).
const CHECKSUM_SPAN: usize = 11;

/// Build one telemetry packet from the current filtered readings,
/// grow-light state, and the daily light accumulator.
pub fn encode(
    readings: FilteredReadings,
    grow_light_on: bool,
    accumulated_secs: u32,
) -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    packet[0..2].copy_from_slice(&readings.light.to_be_bytes());
    packet[2..4].copy_from_slice(&readings.temperature.to_be_bytes());
    packet[4..6].copy_from_slice(&readings.moisture.to_be_bytes());
    packet[6] = u8::from(grow_light_on);
    packet[7..11].copy_from_slice(&accumulated_secs.to_be_bytes());
    packet[11] = checksum(&packet[..CHECKSUM_SPAN]);
    packet[12] = PACKET_TERMINATOR;
    packet
}

/// Mod-256 sum of the given bytes.
fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
