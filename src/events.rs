//! Interrupt-driven event system.
//!
//! Events are produced by:
//! - the 100 ms sampling timer callback
//! - the UART receive path, when a terminator completes a command line
//!
//! Events are consumed by the foreground superloop, which drains the
//! queue once per iteration.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Timer ISR   │────▶│              │     │              │
//! │ UART RX     │────▶│  Event Queue │────▶│  Superloop   │
//! └─────────────┘     │  (lock-free) │     │  (consumer)  │
//!                     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 32;

/// System event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    /// A complete command line is waiting in the receive channel.
    LineReady = 0,
    /// The 100 ms sampling timer fired.
    SampleTick = 10,
}

// ── Lock-free SPSC ring buffer ────────────────────────────────
//
// ISRs write (produce), the superloop reads (consume).  Atomic
// head/tail indices enforce the SPSC discipline; the buffer lives in
// a static so interrupt callbacks can reach it.

static EVENT_HEAD: AtomicU8 = AtomicU8::new(0);
static EVENT_TAIL: AtomicU8 = AtomicU8::new(0);
// SAFETY: EVENT_BUFFER is accessed exclusively through push_event
// (producer: timer-task / RX-drain context) and pop_event (consumer:
// superloop).  The Acquire/Release pairing on head and tail means a
// slot is only read after its write is published and only reused after
// its read is published.
static mut EVENT_BUFFER: [u8; EVENT_QUEUE_CAP] = [0; EVENT_QUEUE_CAP];

/// Push an event into the queue.
/// Safe to call from ISR context (lock-free).
/// Returns `false` if the queue is full (event dropped — the watchdog
/// catches any loop stall long enough to cause that).
pub fn push_event(event: Event) -> bool {
    let head = EVENT_HEAD.load(Ordering::Relaxed);
    let tail = EVENT_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % EVENT_QUEUE_CAP as u8;

    if next_head == tail {
        return false; // Queue full — drop event.
    }

    // SAFETY: single producer; the slot at `head` is unpublished until
    // the Release store below.
    unsafe {
        EVENT_BUFFER[head as usize] = event as u8;
    }

    EVENT_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next event from the queue.
/// Called from the superloop (single consumer).
/// Returns `None` if the queue is empty.
pub fn pop_event() -> Option<Event> {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    // SAFETY: single consumer; the slot at `tail` was published by the
    // producer's Release store on EVENT_HEAD.
    let raw = unsafe { EVENT_BUFFER[tail as usize] };
    EVENT_TAIL.store((tail + 1) % EVENT_QUEUE_CAP as u8, Ordering::Release);

    event_from_u8(raw)
}

/// Drain all pending events into a callback, FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

// ── Internal ──────────────────────────────────────────────────

fn event_from_u8(raw: u8) -> Option<Event> {
    match raw {
        0 => Some(Event::LineReady),
        10 => Some(Event::SampleTick),
        _ => None,
    }
}
