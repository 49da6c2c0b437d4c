//! Command line interpreter.
//!
//! Protocol: ASCII lines of the form `VERB,SUBJECT,VALUE`.  Matching is a
//! substring scan in fixed precedence order (not a prefix match), and the
//! value is whatever follows the *last* comma on the line.  Numeric
//! parsing follows C `atoi` semantics: optional sign, leading decimal
//! digit run, anything else yields 0.  A malformed value therefore
//! degrades to 0 and is applied — the host-side tooling depends on this
//! behaviour, so it is a contract, not a bug.

use crate::app::commands::SetpointCommand;

/// Recognised line forms, checked in order; the first match wins.
const SET_HUMID: &[u8] = b"SET,HUMID,";
const SET_TEMP: &[u8] = b"SET,TEMP,";
const SET_LDR: &[u8] = b"SET,LDR,";
const SET_FOTO: &[u8] = b"SET,FOTO,";
const SET_META_LUZ: &[u8] = b"SET,META_LUZ,";
const RESET_TIMER_LUZ: &[u8] = b"RESET,TIMER_LUZ";

/// Interpret one command line.  Unrecognised lines yield `None` and are
/// dropped without feedback.
pub fn interpret(line: &[u8]) -> Option<SetpointCommand> {
    if contains(line, SET_HUMID) {
        return Some(SetpointCommand::HumidityThreshold(value_u16(line)));
    }
    if contains(line, SET_TEMP) {
        return Some(SetpointCommand::TemperatureThreshold(value_u16(line)));
    }
    if contains(line, SET_LDR) {
        return Some(SetpointCommand::LightThreshold(value_u16(line)));
    }
    if contains(line, SET_FOTO) {
        return Some(SetpointCommand::PhotoperiodEnabled(value_u16(line) == 1));
    }
    if contains(line, SET_META_LUZ) {
        return Some(SetpointCommand::LightGoalSecs(value_u32(line)));
    }
    if contains(line, RESET_TIMER_LUZ) {
        return Some(SetpointCommand::ResetLightTimer);
    }
    None
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Everything after the last comma; empty when the line has no comma.
fn tail_after_last_comma(line: &[u8]) -> &[u8] {
    match line.iter().rposition(|&b| b == b',') {
        Some(i) => &line[i + 1..],
        None => &[],
    }
}

/// C-`atoi` style decimal parse: skip leading blanks, optional sign, then
/// the longest digit run.  No digits → 0.
fn parse_decimal(text: &[u8]) -> i64 {
    let mut i = 0;
    while i < text.len() && (text[i] == b' ' || text[i] == b'\t') {
        i += 1;
    }
    let mut negative = false;
    if i < text.len() && (text[i] == b'+' || text[i] == b'-') {
        negative = text[i] == b'-';
        i += 1;
    }
    let mut value: i64 = 0;
    while i < text.len() && text[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(text[i] - b'0'));
        i += 1;
    }
    if negative { -value } else { value }
}

fn value_u16(line: &[u8]) -> u16 {
    // Truncating cast: oversized values wrap modulo 2^16, which the host
    // tooling already accounts for.
    parse_decimal(tail_after_last_comma(line)) as u16
}

fn value_u32(line: &[u8]) -> u32 {
    parse_decimal(tail_after_last_comma(line)) as u32
}

// ───────────────────────────────────────────────────────────────
//  Tests
// ───────────────────────────────────────────────────────────────
