//! Integration tests for the serial command path: bytes in on the
//! channel, setpoints changed in the service.
//!
//! Drives the same `CommandChannel` → `AppService::handle_line` chain
//! the superloop runs, without a real UART.

use crate::mock_hw::{MockHardware, RecordingSink};

use estufa::app::service::AppService;
use estufa::command::{CommandChannel, LINE_DATA_MAX};
use estufa::config::SystemConfig;

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    let config = SystemConfig::default();
    let mut app = AppService::new(&config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

/// Push a full wire line (with terminator) and hand any completed line
/// to the service, the way the superloop does.
fn deliver(channel: &CommandChannel, app: &mut AppService, sink: &mut RecordingSink, wire: &[u8]) {
    for &b in wire {
        channel.push_byte(b);
    }
    if let Some(line) = channel.take() {
        app.handle_line(&line, sink);
    }
}

#[test]
fn set_temp_applies_twice_through_the_channel() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();

    deliver(&channel, &mut app, &mut sink, b"SET,TEMP,1600\n");
    assert_eq!(app.setpoints().temperature_threshold, 1600);

    deliver(&channel, &mut app, &mut sink, b"SET,TEMP,1600\n");
    assert_eq!(app.setpoints().temperature_threshold, 1600);

    // The channel is fully drained and cleared after each delivery.
    assert!(!channel.is_ready());
    assert!(channel.take().is_none());
}

#[test]
fn every_setpoint_is_reachable_over_the_wire() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();

    deliver(&channel, &mut app, &mut sink, b"SET,HUMID,2750\r");
    deliver(&channel, &mut app, &mut sink, b"SET,TEMP,1500\n");
    deliver(&channel, &mut app, &mut sink, b"SET,LDR,2222\n");
    deliver(&channel, &mut app, &mut sink, b"SET,FOTO,1\n");
    deliver(&channel, &mut app, &mut sink, b"SET,META_LUZ,50400\n");

    let sp = app.setpoints();
    assert_eq!(sp.humidity_threshold, 2750);
    assert_eq!(sp.temperature_threshold, 1500);
    assert_eq!(sp.light_threshold, 2222);
    assert!(sp.photoperiod_enabled);
    assert_eq!(sp.budget.goal_secs(), 50400);
}

#[test]
fn malformed_goal_degrades_to_zero() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();

    deliver(&channel, &mut app, &mut sink, b"SET,META_LUZ,abc\n");
    assert_eq!(
        app.setpoints().budget.goal_secs(),
        0,
        "non-numeric payload applies as zero, it is not rejected"
    );
}

#[test]
fn unrecognised_lines_change_nothing() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();
    let before_events = sink.events.len();

    deliver(&channel, &mut app, &mut sink, b"HELLO,WORLD\n");
    deliver(&channel, &mut app, &mut sink, b"SET,NOPE,9\n");

    let sp = app.setpoints();
    assert_eq!(sp.humidity_threshold, 3000);
    assert_eq!(sp.temperature_threshold, 1600);
    assert_eq!(sp.light_threshold, 2000);
    assert!(!sp.photoperiod_enabled);
    assert_eq!(
        sink.events.len(),
        before_events,
        "ignored lines emit nothing"
    );
}

#[test]
fn oversized_line_truncates_and_still_parses_nothing() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();

    // 150 data bytes: only the first 99 survive, the rest drop silently.
    let mut wire = vec![b'Z'; 150];
    wire.push(b'\n');
    for &b in &wire {
        channel.push_byte(b);
    }
    let line = channel.take().unwrap();
    assert_eq!(line.len(), LINE_DATA_MAX);
    app.handle_line(&line, &mut sink);
    assert_eq!(app.setpoints().humidity_threshold, 3000);
}

#[test]
fn junk_prefix_still_matches_by_substring() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();

    deliver(&channel, &mut app, &mut sink, b"##SET,LDR,1234\n");
    assert_eq!(app.setpoints().light_threshold, 1234);
}

#[test]
fn crlf_terminated_lines_apply_once() {
    let (mut app, _hw, mut sink) = make_app();
    let channel = CommandChannel::new();
    let before_events = sink.events.len();

    deliver(&channel, &mut app, &mut sink, b"SET,HUMID,2900\r\n");
    assert_eq!(app.setpoints().humidity_threshold, 2900);
    assert_eq!(
        sink.events.len(),
        before_events + 1,
        "one SetpointChanged per line, the bare LF is ignored"
    );
}
