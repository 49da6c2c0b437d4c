//! Fuzz target: `parser::interpret`
//!
//! The interpreter must survive arbitrary command lines — binary junk,
//! truncated patterns, absurd numbers — by either decoding a command or
//! returning `None`, never panicking.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = estufa::command::parser::interpret(data);
});
