//! Fuzz target: `CommandChannel::push_byte` / `take`
//!
//! Drives arbitrary byte streams through the serial line assembler and
//! asserts that it never panics, never yields an empty or oversized
//! line, and always clears the ready indicator on take.
//!
//! cargo fuzz run fuzz_line_assembler

#![no_main]

use estufa::command::{CommandChannel, LINE_DATA_MAX};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let channel = CommandChannel::new();

    for &byte in data {
        if channel.push_byte(byte) {
            let line = channel.take().expect("completed line must be takeable");
            assert!(!line.is_empty(), "empty lines are filtered at the terminator");
            assert!(line.len() <= LINE_DATA_MAX, "line exceeds the 99-byte cap");
            assert!(!channel.is_ready(), "take must clear the ready indicator");
        }
    }

    // Whatever partial state remains, a take on a non-ready channel is a no-op.
    if !channel.is_ready() {
        assert!(channel.take().is_none());
    }
});
