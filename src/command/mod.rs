//! Serial command reception.
//!
//! The receive interrupt path does the minimum possible work: append a
//! byte, detect a line terminator, raise the ready indicator.  Everything
//! that looks like string handling — matching, number parsing, setpoint
//! mutation — is deferred to the foreground loop via [`parser`].
//!
//! ```text
//! UART RX ISR ──▶ CommandChannel::push_byte ──▶ ready
//!                                                 │
//! foreground ◀── CommandChannel::take ◀───────────┘
//! ```
//!
//! The channel is a shared `static`: the byte buffer sits behind a
//! `critical_section::Mutex` (each access is a few loads and stores, well
//! inside interrupt-latency budgets) and the ready indicator is a plain
//! atomic so the foreground can poll it without entering the critical
//! section.

pub mod parser;

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;

/// Raw line buffer size, matching the wire protocol's 100-byte frame.
pub const LINE_CAPACITY: usize = 100;
/// Maximum data bytes per line; the last slot is never filled.
pub const LINE_DATA_MAX: usize = LINE_CAPACITY - 1;

/// A completed command line, copied out of the shared buffer.
pub type CommandLine = heapless::Vec<u8, LINE_DATA_MAX>;

/// Interrupt-side line assembly state.
struct LineBuffer {
    bytes: [u8; LINE_CAPACITY],
    /// Next write position.
    write_idx: usize,
    /// Length of the completed line waiting for the foreground.
    pending_len: usize,
}

/// SPSC channel carrying command lines from the receive interrupt to the
/// foreground interpreter.
pub struct CommandChannel {
    line: Mutex<RefCell<LineBuffer>>,
    /// Set by `push_byte` on line completion, cleared by `take`.
    ready: AtomicBool,
}

impl Default for CommandChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandChannel {
    pub const fn new() -> Self {
        Self {
            line: Mutex::new(RefCell::new(LineBuffer {
                bytes: [0; LINE_CAPACITY],
                write_idx: 0,
                pending_len: 0,
            })),
            ready: AtomicBool::new(false),
        }
    }

    /// Feed one received byte.  Interrupt-side producer.
    ///
    /// Returns `true` when the byte completed a line.  CR or LF on an
    /// empty buffer (repeated terminators) is ignored.  Once the buffer
    /// holds [`LINE_DATA_MAX`] data bytes, further bytes before the next
    /// terminator are silently dropped — no truncation marker.
    pub fn push_byte(&self, byte: u8) -> bool {
        critical_section::with(|cs| {
            let mut buf = self.line.borrow_ref_mut(cs);
            if byte == b'\r' || byte == b'\n' {
                let len = buf.write_idx;
                if len > 0 {
                    buf.pending_len = len;
                    buf.write_idx = 0;
                    self.ready.store(true, Ordering::Release);
                    return true;
                }
                return false;
            }
            if buf.write_idx < LINE_DATA_MAX {
                let i = buf.write_idx;
                buf.bytes[i] = byte;
                buf.write_idx = i + 1;
            }
            false
        })
    }

    /// Whether a completed line is waiting.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Take the completed line, if any.  Foreground-side consumer.
    ///
    /// Copies the line out, zeroes the whole buffer, and clears the ready
    /// indicator — unconditionally, whatever the interpreter later makes
    /// of the line.  The write index is deliberately left alone: a next
    /// line already in flight keeps its offset, and its wiped prefix
    /// reads as zeros.
    pub fn take(&self) -> Option<CommandLine> {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }
        critical_section::with(|cs| {
            let mut buf = self.line.borrow_ref_mut(cs);
            let mut line = CommandLine::new();
            // pending_len <= LINE_DATA_MAX == capacity, so this cannot fail.
            let _ = line.extend_from_slice(&buf.bytes[..buf.pending_len]);
            buf.bytes.fill(0);
            buf.pending_len = 0;
            self.ready.store(false, Ordering::Release);
            Some(line)
        })
    }
}

// ───────────────────────────────────────────────────────────────
//  Tests
// ───────────────────────────────────────────────────────────────
